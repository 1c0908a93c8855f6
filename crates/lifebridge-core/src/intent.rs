/// Launch or re-launch request delivered by the host.
///
/// Every field is a plain string; hosts that omit a value get `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    pub from_package: String,
    pub command: String,
    pub uri: String,
}

impl Intent {
    pub fn new(
        from_package: Option<&str>,
        command: Option<&str>,
        uri: Option<&str>,
    ) -> Self {
        Self {
            from_package: from_package.unwrap_or_default().to_owned(),
            command: command.unwrap_or_default().to_owned(),
            uri: uri.unwrap_or_default().to_owned(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from_package.is_empty() && self.command.is_empty() && self.uri.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_become_empty() {
        let i = Intent::new(None, Some("launch"), None);
        assert_eq!(i.from_package, "");
        assert_eq!(i.command, "launch");
        assert_eq!(i.uri, "");
        assert!(!i.is_empty());
        assert!(Intent::default().is_empty());
    }
}
