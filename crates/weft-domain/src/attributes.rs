//! Attribute catalogue - the fixed, ordered set of keys the model is asked for

/// Placeholder the model is told to use for attributes the text never mentions
pub const NOT_AVAILABLE: &str = "Not Available";

/// A titled group of attribute keys, rendered together in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeGroup {
    /// Heading shown above the keys (e.g. "Care Attributes")
    pub title: &'static str,

    /// Attribute keys in prompt order
    pub keys: &'static [&'static str],
}

/// Product attributes, describing the garment itself
pub const PRODUCT_ATTRIBUTES: AttributeGroup = AttributeGroup {
    title: "Product Attributes",
    keys: &[
        "Product Type",
        "Support/Wiring",
        "Closures",
        "Neckline design",
        "Waist Style",
        "Design Features",
        "Intended Use / Function",
        "Length",
    ],
};

/// Care attributes, describing how the garment is maintained
pub const CARE_ATTRIBUTES: AttributeGroup = AttributeGroup {
    title: "Care Attributes",
    keys: &[
        "Washing Instructions",
        "Drying Method",
        "Bleach Instructions",
        "Dry Cleaning",
        "Ironing Instructions",
    ],
};

/// All attribute groups, in prompt order
pub const ATTRIBUTE_GROUPS: [AttributeGroup; 2] = [PRODUCT_ATTRIBUTES, CARE_ATTRIBUTES];

/// Iterate over every attribute key in prompt order
///
/// # Examples
///
/// ```
/// use weft_domain::attributes::attribute_keys;
///
/// let keys: Vec<_> = attribute_keys().collect();
/// assert_eq!(keys.first(), Some(&"Product Type"));
/// assert_eq!(keys.last(), Some(&"Ironing Instructions"));
/// ```
pub fn attribute_keys() -> impl Iterator<Item = &'static str> {
    ATTRIBUTE_GROUPS.iter().flat_map(|group| group.keys.iter().copied())
}
