use std::fmt;
use crate::config::AdvisoryParameters;

/// Advice for the day, chosen from the maximum temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    ExtremeHeat,
    TooHot,
    Commute,
}

impl Advisory {
    /// Returns the advisory for a temperature. Comparisons are strict, so a temperature
    /// equal to a threshold falls to the lower advisory.
    ///
    /// # Arguments
    ///
    /// * 'temperature' - maximum temperature in degrees Celsius
    /// * 'params' - judgement and extreme heat thresholds
    pub fn for_temperature(temperature: f64, params: &AdvisoryParameters) -> Advisory {
        if temperature > params.extreme_temp {
            Advisory::ExtremeHeat
        } else if temperature > params.judgement_temp {
            Advisory::TooHot
        } else {
            Advisory::Commute
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advisory::ExtremeHeat => "本日は在宅作業よ。屋内でも熱中症になることも多いから、気を付けて。",
            Advisory::TooHot => "ハァ……暑すぎ。今日は在宅作業をオススメするけど。",
            Advisory::Commute => "本日は出社日よ。水分をこまめに摂って、出社中の熱中症には十分気を付けて。",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advise(temperature: f64) -> Advisory {
        Advisory::for_temperature(temperature, &AdvisoryParameters::default())
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(advise(30.0), Advisory::TooHot);
        assert_eq!(advise(30.1), Advisory::ExtremeHeat);
        assert_eq!(advise(27.0), Advisory::Commute);
        assert_eq!(advise(27.1), Advisory::TooHot);
        assert_eq!(advise(10.0), Advisory::Commute);
    }

    #[test]
    fn extreme_branch_wins_over_judgement() {
        assert_eq!(advise(38.4), Advisory::ExtremeHeat);
        assert_eq!(advise(-3.0), Advisory::Commute);
    }

    #[test]
    fn configured_thresholds() {
        let params = AdvisoryParameters { judgement_temp: 25.0, extreme_temp: 28.0 };
        assert_eq!(Advisory::for_temperature(25.0, &params), Advisory::Commute);
        assert_eq!(Advisory::for_temperature(26.0, &params), Advisory::TooHot);
        assert_eq!(Advisory::for_temperature(28.5, &params), Advisory::ExtremeHeat);
    }

    #[test]
    fn messages_are_distinct() {
        let msgs = [Advisory::ExtremeHeat, Advisory::TooHot, Advisory::Commute].map(|a| a.to_string());
        assert_ne!(msgs[0], msgs[1]);
        assert_ne!(msgs[1], msgs[2]);
        assert_ne!(msgs[0], msgs[2]);
        assert!(msgs[2].starts_with("本日は出社日よ"));
    }
}
