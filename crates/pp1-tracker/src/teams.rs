#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub name: &'static str,
    pub slug: &'static str,
}

const fn team(name: &'static str, slug: &'static str) -> Team {
    Team { name, slug }
}

pub const TEAMS: [Team; 32] = [
    team("Anaheim Ducks", "anaheim-ducks"),
    team("Utah Mammoth", "utah-mammoth"),
    team("Boston Bruins", "boston-bruins"),
    team("Buffalo Sabres", "buffalo-sabres"),
    team("Calgary Flames", "calgary-flames"),
    team("Carolina Hurricanes", "carolina-hurricanes"),
    team("Chicago Blackhawks", "chicago-blackhawks"),
    team("Colorado Avalanche", "colorado-avalanche"),
    team("Columbus Blue Jackets", "columbus-blue-jackets"),
    team("Dallas Stars", "dallas-stars"),
    team("Detroit Red Wings", "detroit-red-wings"),
    team("Edmonton Oilers", "edmonton-oilers"),
    team("Florida Panthers", "florida-panthers"),
    team("Los Angeles Kings", "los-angeles-kings"),
    team("Minnesota Wild", "minnesota-wild"),
    team("Montreal Canadiens", "montreal-canadiens"),
    team("Nashville Predators", "nashville-predators"),
    team("New Jersey Devils", "new-jersey-devils"),
    team("New York Islanders", "new-york-islanders"),
    team("New York Rangers", "new-york-rangers"),
    team("Ottawa Senators", "ottawa-senators"),
    team("Philadelphia Flyers", "philadelphia-flyers"),
    team("Pittsburgh Penguins", "pittsburgh-penguins"),
    team("San Jose Sharks", "san-jose-sharks"),
    team("Seattle Kraken", "seattle-kraken"),
    team("St. Louis Blues", "st-louis-blues"),
    team("Tampa Bay Lightning", "tampa-bay-lightning"),
    team("Toronto Maple Leafs", "toronto-maple-leafs"),
    team("Vancouver Canucks", "vancouver-canucks"),
    team("Vegas Golden Knights", "vegas-golden-knights"),
    team("Washington Capitals", "washington-capitals"),
    team("Winnipeg Jets", "winnipeg-jets"),
];

pub fn find(name: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
