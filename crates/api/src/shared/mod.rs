#[cfg(test)]
pub mod test_utils;
pub mod usecase;

/// Trims user provided text and treats blank text as missing
pub fn non_empty(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Response of use cases that change an existing entity
#[derive(Debug, Clone)]
pub struct Updated<T> {
    pub old: T,
    pub new: T,
}
