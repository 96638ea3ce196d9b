use std::fmt;
use std::str::FromStr;

use poise::ChoiceParameter;

use crate::error::AppError;

/// Platform routing values (Summoner-v4, League-v4, Champion-Mastery-v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceParameter)]
pub enum Platform {
    #[name = "BR"]
    BR1,
    #[name = "EUNE"]
    EUN1,
    #[name = "EUW"]
    EUW1,
    #[name = "JP"]
    JP1,
    #[name = "KR"]
    KR,
    #[name = "LAN"]
    LA1,
    #[name = "LAS"]
    LA2,
    #[name = "NA"]
    NA1,
    #[name = "OCE"]
    OC1,
    #[name = "RU"]
    RU,
    #[name = "SEA"]
    SG2,
    #[name = "TR"]
    TR1,
    #[name = "TW"]
    TW2,
    #[name = "VN"]
    VN2,
}

impl Platform {
    pub const ALL: [Platform; 14] = [
        Self::BR1,
        Self::EUN1,
        Self::EUW1,
        Self::JP1,
        Self::KR,
        Self::LA1,
        Self::LA2,
        Self::NA1,
        Self::OC1,
        Self::RU,
        Self::SG2,
        Self::TR1,
        Self::TW2,
        Self::VN2,
    ];

    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "br1",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::NA1 => "na1",
            Self::OC1 => "oc1",
            Self::RU => "ru",
            Self::SG2 => "sg2",
            Self::TR1 => "tr1",
            Self::TW2 => "tw2",
            Self::VN2 => "vn2",
        }
    }

    /// User-facing server name, as accepted by the slash commands.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BR1 => "BR",
            Self::EUN1 => "EUNE",
            Self::EUW1 => "EUW",
            Self::JP1 => "JP",
            Self::KR => "KR",
            Self::LA1 => "LAN",
            Self::LA2 => "LAS",
            Self::NA1 => "NA",
            Self::OC1 => "OCE",
            Self::RU => "RU",
            Self::SG2 => "SEA",
            Self::TR1 => "TR",
            Self::TW2 => "TW",
            Self::VN2 => "VN",
        }
    }

    /// Regional route serving account and match data for this platform.
    pub fn to_region(self) -> Region {
        match self {
            Self::BR1 | Self::LA1 | Self::LA2 | Self::NA1 => Region::Americas,
            Self::JP1 | Self::KR => Region::Asia,
            Self::EUN1 | Self::EUW1 | Self::RU | Self::TR1 => Region::Europe,
            Self::OC1 | Self::SG2 | Self::TW2 | Self::VN2 => Region::Sea,
        }
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BR" | "BR1" => Ok(Self::BR1),
            "EUNE" | "EUN1" => Ok(Self::EUN1),
            "EUW" | "EUW1" => Ok(Self::EUW1),
            "JP" | "JP1" => Ok(Self::JP1),
            "KR" => Ok(Self::KR),
            "LAN" | "LA1" => Ok(Self::LA1),
            "LAS" | "LA2" => Ok(Self::LA2),
            "NA" | "NA1" => Ok(Self::NA1),
            "OCE" | "OC1" => Ok(Self::OC1),
            "RU" => Ok(Self::RU),
            "SEA" | "SG2" => Ok(Self::SG2),
            "TR" | "TR1" => Ok(Self::TR1),
            "TW" | "TW2" => Ok(Self::TW2),
            "VN" | "VN2" => Ok(Self::VN2),
            _ => Err(AppError::InvalidServer(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Regional routing values (Account-v1, Match-v5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Region {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_parse_back() {
        for platform in Platform::ALL {
            assert_eq!(platform.display_name().parse::<Platform>().unwrap(), platform);
        }
        assert_eq!("eune".parse::<Platform>().unwrap(), Platform::EUN1);
    }

    #[test]
    fn unknown_server_lists_valid_names() {
        let err = "ASGARD".parse::<Platform>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ASGARD"));
        assert!(msg.contains("EUNE"));
    }

    #[test]
    fn platforms_route_to_their_region() {
        assert_eq!(Platform::EUN1.to_region(), Region::Europe);
        assert_eq!(Platform::NA1.to_region(), Region::Americas);
        assert_eq!(Platform::KR.to_region(), Region::Asia);
        assert_eq!(Platform::SG2.to_region(), Region::Sea);
        assert_eq!(
            Region::Europe.base_url(),
            "https://europe.api.riotgames.com"
        );
        assert_eq!(Platform::EUN1.base_url(), "https://eun1.api.riotgames.com");
    }
}
