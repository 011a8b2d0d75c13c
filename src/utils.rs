use scraper::ElementRef;

/// Concatenated text of an element and its descendants, trimmed
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Value of an attribute, or an empty string when absent
pub fn attr_or_empty(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// Class attribute normalized to a single-space separated list
pub fn class_list(element: ElementRef<'_>) -> String {
    element
        .value()
        .attr("class")
        .map(|classes| classes.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Whether the class attribute contains exactly this class name
pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}
