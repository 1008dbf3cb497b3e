/// Charge and address categories that drop a row from the report.
pub const DEFAULT_EXCLUDE_PHRASES: [&str; 12] = [
    "Violation of probation",
    "Homeless",
    "Booked for previous charges or other reason",
    "Failure to appear",
    "Driving on",
    "Retaliation against",
    "Fugitive",
    "Driving under the influence",
    "Contraband in penal institutions",
    "Violation of protection order",
    "Violation of restraining order",
    "717 E 11th St",
];

/// Ordered list of exclusion phrases, matched case-insensitively as substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionList {
    phrases: Vec<String>,
    lowered: Vec<String>,
}

impl ExclusionList {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self {
            phrases: Vec::new(),
            lowered: Vec::new(),
        };
        for phrase in phrases {
            list.push(phrase);
        }
        list
    }

    /// One phrase per line; blank lines and `#` comments are skipped.
    pub fn parse_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn push(&mut self, phrase: impl Into<String>) {
        let phrase = phrase.into();
        self.lowered.push(phrase.to_lowercase());
        self.phrases.push(phrase);
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Returns the first phrase (in list order) contained in any haystack.
    ///
    /// Blank phrases never match; an empty needle would otherwise exclude every row.
    pub fn first_match(&self, haystacks: &[&str]) -> Option<&str> {
        let lowered: Vec<String> = haystacks.iter().map(|h| h.to_lowercase()).collect();
        self.phrases
            .iter()
            .zip(&self.lowered)
            .filter(|(_, needle)| !needle.trim().is_empty())
            .find(|(_, needle)| lowered.iter().any(|hay| hay.contains(needle.as_str())))
            .map(|(phrase, _)| phrase.as_str())
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE_PHRASES)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
