//! Prompt construction for attribute extraction

use weft_domain::{ATTRIBUTE_GROUPS, NOT_AVAILABLE};

/// Delimiter placed around each embedded input text
const DELIMITER: &str = r#"""""#;

/// Replacement for the delimiter when escaping is enabled
const ESCAPED_DELIMITER: &str = r#"\"\"\""#;

/// Builds the extraction prompt for one record
///
/// The output is deterministic: the same inputs always produce the same
/// prompt.
pub struct PromptBuilder {
    description: String,
    care_instructions: String,
    placeholder: String,
    escape_delimiters: bool,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(description: impl Into<String>, care_instructions: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            care_instructions: care_instructions.into(),
            placeholder: NOT_AVAILABLE.to_string(),
            escape_delimiters: false,
        }
    }

    /// Use a different placeholder for absent attributes
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Escape delimiter sequences inside the embedded texts
    pub fn with_escaped_delimiters(mut self, escape: bool) -> Self {
        self.escape_delimiters = escape;
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Role and task
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Attribute keys, grouped
        for group in ATTRIBUTE_GROUPS.iter() {
            prompt.push_str(&format!("{}:\n", group.title));
            for key in group.keys {
                prompt.push_str(&format!("- {}\n", key));
            }
            prompt.push('\n');
        }

        // 3. Placeholder rule
        prompt.push_str(&format!(
            "Only include values that are mentioned or strongly implied. If something is missing, use \"{}\".\n\n",
            self.placeholder
        ));

        // 4. The texts to analyze
        prompt.push_str("Product Description:\n");
        prompt.push_str(&self.delimited(&self.description));
        prompt.push_str("\n\nCare Instructions:\n");
        prompt.push_str(&self.delimited(&self.care_instructions));
        prompt.push_str("\n\n");

        // 5. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);
        prompt.push('\n');

        prompt
    }

    fn delimited(&self, text: &str) -> String {
        let body = if self.escape_delimiters {
            text.replace(DELIMITER, ESCAPED_DELIMITER)
        } else {
            text.to_string()
        };
        format!("{DELIMITER}{body}{DELIMITER}")
    }
}

const EXTRACTION_INSTRUCTIONS: &str = "You are an expert product data annotator. Extract the following attributes from the product description and care instructions. Return them as a valid JSON object with these keys:";

const OUTPUT_FORMAT_REMINDER: &str = "Only return valid JSON. No explanation.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_description_and_json_only_instruction() {
        let prompt = PromptBuilder::new("100% cotton", "").build();
        assert!(prompt.contains("100% cotton"));
        assert!(prompt.contains("Only return valid JSON. No explanation."));
    }

    #[test]
    fn test_prompt_embeds_texts_in_delimiters() {
        let prompt = PromptBuilder::new("Wrap dress", "Machine wash 30C").build();
        assert!(prompt.contains("Product Description:\n\"\"\"Wrap dress\"\"\""));
        assert!(prompt.contains("Care Instructions:\n\"\"\"Machine wash 30C\"\"\""));
    }

    #[test]
    fn test_prompt_empty_care_instructions() {
        let prompt = PromptBuilder::new("Wrap dress", "").build();
        assert!(prompt.contains("Care Instructions:\n\"\"\"\"\"\""));
    }

    #[test]
    fn test_prompt_lists_keys_in_order() {
        let prompt = PromptBuilder::new("", "").build();
        let product = prompt.find("- Product Type").unwrap();
        let length = prompt.find("- Length").unwrap();
        let care_header = prompt.find("Care Attributes:").unwrap();
        let ironing = prompt.find("- Ironing Instructions").unwrap();

        assert!(product < length);
        assert!(length < care_header);
        assert!(care_header < ironing);
        assert!(prompt.contains("- Intended Use / Function\n"));
    }

    #[test]
    fn test_prompt_uses_placeholder() {
        let prompt = PromptBuilder::new("", "").build();
        assert!(prompt.contains("use \"Not Available\""));

        let prompt = PromptBuilder::new("", "").with_placeholder("unknown").build();
        assert!(prompt.contains("use \"unknown\""));
        assert!(!prompt.contains("Not Available"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = PromptBuilder::new("Lace bra", "Hand wash").build();
        let b = PromptBuilder::new("Lace bra", "Hand wash").build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_delimiters_not_escaped_by_default() {
        let prompt = PromptBuilder::new(r#"Says """hi""""#, "").build();
        assert!(prompt.contains(r#""""Says """hi"""""""#));
    }

    #[test]
    fn test_delimiters_escaped_when_enabled() {
        let prompt = PromptBuilder::new(r#"a"""b"#, "")
            .with_escaped_delimiters(true)
            .build();
        assert!(prompt.contains(r#""""a\"\"\"b""""#));
    }
}
