//! Scenario prompt construction.

use strum::Display;

/// The eight CISSP knowledge domains, labeled the way the exam numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Domain {
    #[strum(to_string = "1. Security & Risk Management")]
    SecurityRiskManagement,
    #[strum(to_string = "2. Asset Security")]
    AssetSecurity,
    #[strum(to_string = "3. Security Architecture & Engineering")]
    SecurityArchitectureEngineering,
    #[strum(to_string = "4. Communication & Network Security")]
    CommunicationNetworkSecurity,
    #[strum(to_string = "5. Identity & Access Management (IAM)")]
    IdentityAccessManagement,
    #[strum(to_string = "6. Security Assessment & Testing")]
    SecurityAssessmentTesting,
    #[strum(to_string = "7. Security Operations")]
    SecurityOperations,
    #[strum(to_string = "8. Software Development Security")]
    SoftwareDevelopmentSecurity,
}

/// Simulation difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Difficulty {
    #[strum(to_string = "Associate")]
    Associate,
    #[strum(to_string = "Professional")]
    Professional,
    #[strum(to_string = "Chief Architect")]
    ChiefArchitect,
}

/// One user-triggered scenario request. Immutable once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioRequest {
    pub domain: Domain,
    pub difficulty: Difficulty,
}

impl ScenarioRequest {
    /// Render the exam-creator prompt. The `---` separator in the template is
    /// what [`crate::present::split_reveal`] later partitions on.
    pub fn prompt(&self) -> String {
        format!(
            "Act as a CISSP exam creator. Create a {difficulty}-level scenario for: {domain}.\n\
             Format exactly as:\n\
             **SCENARIO:** [Text]\n\
             **QUESTION:** [Text]\n\
             **OPTIONS:**\n\
             A) [Text]\n\
             B) [Text]\n\
             C) [Text]\n\
             D) [Text]\n\
             ---\n\
             **CORRECT ANSWER:** [Letter]\n\
             **EXPLANATION:** [Text]",
            difficulty = self.difficulty,
            domain = self.domain,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::ANSWER_SEPARATOR;

    #[test]
    fn prompt_names_domain_and_difficulty() {
        let request = ScenarioRequest {
            domain: Domain::IdentityAccessManagement,
            difficulty: Difficulty::ChiefArchitect,
        };
        let prompt = request.prompt();
        assert!(prompt.contains("5. Identity & Access Management (IAM)"));
        assert!(prompt.contains("Chief Architect-level"));
    }

    #[test]
    fn prompt_template_carries_the_reveal_separator() {
        let request = ScenarioRequest {
            domain: Domain::AssetSecurity,
            difficulty: Difficulty::Associate,
        };
        assert!(request.prompt().contains(ANSWER_SEPARATOR));
    }

    #[test]
    fn domain_labels_keep_exam_numbering() {
        assert_eq!(
            Domain::SecurityRiskManagement.to_string(),
            "1. Security & Risk Management"
        );
        assert_eq!(
            Domain::SoftwareDevelopmentSecurity.to_string(),
            "8. Software Development Security"
        );
    }
}
