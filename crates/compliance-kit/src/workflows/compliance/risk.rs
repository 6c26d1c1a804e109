use serde::Serialize;

use super::domain::{Answer, Locale, PersonalDataExposure};

pub const MAX_RISK_SCORE: u8 = 6;

/// Three-level severity band derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=1 => Self::Low,
            2..=3 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Low, Locale::De) => "Niedrig",
            (Self::Low, Locale::En) => "Low",
            (Self::Medium, Locale::De) => "Mittel",
            (Self::Medium, Locale::En) => "Medium",
            (Self::High, Locale::De) => "Hoch",
            (Self::High, Locale::En) => "High",
        }
    }

    pub fn recommended_actions(self) -> &'static [RecommendedAction] {
        use RecommendedAction::*;
        match self {
            Self::High => &[
                FourEyesReview,
                MandatoryDocumentation,
                DataProtectionReview,
                NoUnsupervisedAutomation,
            ],
            Self::Medium => &[
                HumanReview,
                DataMinimization,
                RegisterDocumentation,
                PeriodicReview,
            ],
            Self::Low => &[HumanReview, DataMinimization, RegisterNote],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendedAction {
    FourEyesReview,
    MandatoryDocumentation,
    DataProtectionReview,
    NoUnsupervisedAutomation,
    HumanReview,
    DataMinimization,
    RegisterDocumentation,
    PeriodicReview,
    RegisterNote,
}

impl RecommendedAction {
    pub fn text(self, locale: Locale) -> &'static str {
        use RecommendedAction::*;
        match (self, locale) {
            (FourEyesReview, Locale::De) => {
                "Vier-Augen-Prinzip: KI-Ergebnisse vor externer Nutzung oder Entscheidungen durch eine zweite Person prüfen"
            }
            (FourEyesReview, Locale::En) => {
                "Four-eyes principle: a second person reviews AI outputs before external use or decisions"
            }
            (MandatoryDocumentation, Locale::De) => {
                "Verpflichtende Dokumentation jedes KI-Einsatzes im internen KI-Verzeichnis"
            }
            (MandatoryDocumentation, Locale::En) => {
                "Mandatory documentation of every AI use case in the internal AI register"
            }
            (DataProtectionReview, Locale::De) => {
                "Datenschutzprüfung inkl. Auftragsverarbeitungsverträgen (Art. 28 DSGVO) mit allen KI-Anbietern"
            }
            (DataProtectionReview, Locale::En) => {
                "Data protection review including data processing agreements (Art. 28 GDPR) with all AI providers"
            }
            (NoUnsupervisedAutomation, Locale::De) => {
                "Keine unbeaufsichtigten automatisierten Entscheidungen mit rechtlicher oder ähnlich erheblicher Wirkung"
            }
            (NoUnsupervisedAutomation, Locale::En) => {
                "No unsupervised automated decisions with legal or similarly significant effect"
            }
            (HumanReview, Locale::De) => "Menschliche Prüfung von KI-Ergebnissen vor der Verwendung",
            (HumanReview, Locale::En) => "Human review of AI outputs before use",
            (DataMinimization, Locale::De) => {
                "Datenminimierung: nur unbedingt erforderliche Daten in KI-Tools eingeben"
            }
            (DataMinimization, Locale::En) => {
                "Data minimization: enter only strictly necessary data into AI tools"
            }
            (RegisterDocumentation, Locale::De) => {
                "Dokumentation von Tools und Zwecken im internen KI-Verzeichnis"
            }
            (RegisterDocumentation, Locale::En) => {
                "Document tools and purposes in the internal AI register"
            }
            (PeriodicReview, Locale::De) => "Überprüfung des KI-Einsatzes mindestens alle 12 Monate",
            (PeriodicReview, Locale::En) => "Review the AI use case at least every 12 months",
            (RegisterNote, Locale::De) => "Kurzer Vermerk des KI-Tools im internen KI-Verzeichnis",
            (RegisterNote, Locale::En) => "Brief note of the AI tool in the internal AI register",
        }
    }
}

/// Score, band, and action list derived from the three risk factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub recommended_actions: Vec<RecommendedAction>,
}

impl RiskAssessment {
    /// `"<level> (<score>/6)"` in the requested language.
    pub fn summary(&self, locale: Locale) -> String {
        format!(
            "{} ({}/{})",
            self.level.label(locale),
            self.score,
            MAX_RISK_SCORE
        )
    }

    pub fn action_texts(&self, locale: Locale) -> impl Iterator<Item = &'static str> + '_ {
        self.recommended_actions
            .iter()
            .map(move |action| action.text(locale))
    }
}

/// Pure point table over personal data exposure, external use and automated decisions.
pub fn score(
    personal_data: PersonalDataExposure,
    external_use: Answer,
    automated_decisions: Answer,
) -> RiskAssessment {
    let mut points: u8 = match personal_data {
        PersonalDataExposure::No => 0,
        PersonalDataExposure::Limited => 1,
        PersonalDataExposure::Regular => 2,
    };
    if external_use.is_yes() {
        points += 2;
    }
    if automated_decisions.is_yes() {
        points += 2;
    }

    let level = RiskLevel::from_score(points);
    RiskAssessment {
        score: points,
        level,
        recommended_actions: level.recommended_actions().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_combination_stays_in_range_and_banded() {
        for personal_data in PersonalDataExposure::ALL {
            for external_use in Answer::ALL {
                for automated in Answer::ALL {
                    let assessment = score(personal_data, external_use, automated);
                    assert!(assessment.score <= MAX_RISK_SCORE);
                    let expected = if assessment.score >= 4 {
                        RiskLevel::High
                    } else if assessment.score >= 2 {
                        RiskLevel::Medium
                    } else {
                        RiskLevel::Low
                    };
                    assert_eq!(assessment.level, expected);
                    assert_eq!(
                        assessment.recommended_actions,
                        expected.recommended_actions()
                    );
                }
            }
        }
    }

    #[test]
    fn point_table_matches_factors() {
        assert_eq!(score(PersonalDataExposure::No, Answer::No, Answer::No).score, 0);
        assert_eq!(
            score(PersonalDataExposure::Limited, Answer::No, Answer::No).score,
            1
        );
        assert_eq!(
            score(PersonalDataExposure::Regular, Answer::No, Answer::No).score,
            2
        );
        assert_eq!(score(PersonalDataExposure::No, Answer::Yes, Answer::No).score, 2);
        assert_eq!(score(PersonalDataExposure::No, Answer::No, Answer::Yes).score, 2);

        let worst = score(PersonalDataExposure::Regular, Answer::Yes, Answer::Yes);
        assert_eq!(worst.score, MAX_RISK_SCORE);
        assert_eq!(worst.level, RiskLevel::High);
        assert_eq!(worst.summary(Locale::En), "High (6/6)");
        assert_eq!(worst.summary(Locale::De), "Hoch (6/6)");
    }

    #[test]
    fn limited_data_with_external_use_is_medium() {
        let assessment = score(PersonalDataExposure::Limited, Answer::Yes, Answer::No);
        assert_eq!(assessment.score, 3);
        assert_eq!(assessment.level, RiskLevel::Medium);
        assert_eq!(assessment.recommended_actions.len(), 4);
    }

    #[test]
    fn low_band_has_three_actions() {
        let assessment = score(PersonalDataExposure::Limited, Answer::No, Answer::No);
        assert_eq!(assessment.level, RiskLevel::Low);
        let texts: Vec<_> = assessment.action_texts(Locale::En).collect();
        assert_eq!(
            texts,
            vec![
                "Human review of AI outputs before use",
                "Data minimization: enter only strictly necessary data into AI tools",
                "Brief note of the AI tool in the internal AI register",
            ]
        );
    }
}
