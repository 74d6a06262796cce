use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time window used to filter expenses and statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "diario")]
    Daily,
    #[serde(rename = "semanal")]
    Weekly,
    #[serde(rename = "mensal")]
    Monthly,
    #[serde(rename = "anual")]
    Yearly,
    /// No filter
    #[default]
    #[serde(rename = "todos")]
    All,
}

impl Period {
    /// Tab order in the UI
    pub const ALL: [Period; 5] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Yearly,
        Period::All,
    ];

    /// Wire value (`data-periodo` in the tabs)
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "diario",
            Period::Weekly => "semanal",
            Period::Monthly => "mensal",
            Period::Yearly => "anual",
            Period::All => "todos",
        }
    }

    /// Value of the `periodo` query parameter, `None` when no filter applies
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Period::All => None,
            other => Some(other.as_str()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Diário",
            Period::Weekly => "Semanal",
            Period::Monthly => "Mensal",
            Period::Yearly => "Anual",
            Period::All => "Todos",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diario" => Ok(Period::Daily),
            "semanal" => Ok(Period::Weekly),
            "mensal" => Ok(Period::Monthly),
            "anual" => Ok(Period::Yearly),
            "todos" => Ok(Period::All),
            other => Err(format!("Período desconhecido: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_no_query_value() {
        assert_eq!(Period::All.query_value(), None);
        assert_eq!(Period::Monthly.query_value(), Some("mensal"));
        assert_eq!(Period::Daily.query_value(), Some("diario"));
    }

    #[test]
    fn test_parse_matches_wire_values() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>().unwrap(), period);
        }
        assert!("semana".parse::<Period>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_values() {
        assert_eq!(serde_json::to_string(&Period::Yearly).unwrap(), "\"anual\"");
        let parsed: Period = serde_json::from_str("\"semanal\"").unwrap();
        assert_eq!(parsed, Period::Weekly);
    }
}
