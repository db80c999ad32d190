use serde::Deserialize;

pub const FACTS_PER_CYCLE: usize = 3;

pub type Fact = String;

/// Os três fatos exibidos, alinhados 1:1 com os slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactSet(pub [Fact; FACTS_PER_CYCLE]);

impl FactSet {
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Fact] {
        &self.0
    }
}

impl TryFrom<Vec<Fact>> for FactSet {
    type Error = Vec<Fact>;

    fn try_from(facts: Vec<Fact>) -> Result<Self, Self::Error> {
        let arr: [Fact; FACTS_PER_CYCLE] = facts.try_into()?;
        Ok(FactSet(arr))
    }
}

// Formato da resposta: { "data": ["..."] }
#[derive(Debug, Deserialize)]
pub struct FactResponse {
    pub data: Vec<String>,
}

impl FactResponse {
    pub fn into_first(self) -> Option<Fact> {
        self.data.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_set_requires_exactly_three() {
        let two = vec!["a".to_string(), "b".to_string()];
        assert!(FactSet::try_from(two).is_err());

        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let set = FactSet::try_from(three).unwrap();
        assert_eq!(set.as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn response_reads_first_entry_only() {
        let r: FactResponse = serde_json::from_str(r#"{"data":["one","two"]}"#).unwrap();
        assert_eq!(r.into_first().as_deref(), Some("one"));

        let empty: FactResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(empty.into_first(), None);
    }
}
