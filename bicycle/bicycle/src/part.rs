#[derive(Debug, Clone)]
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Part {
    pub name: String,
    pub description: String,
    pub needs_spare: bool,
}

impl Part {
    pub fn new(name: String, description: String, needs_spare: bool) -> Self {
        Self {
            name,
            description,
            needs_spare,
        }
    }
}

#[cfg(feature = "testing")]
impl Default for Part {
    fn default() -> Self {
        Self {
            name: "default_part".to_string(),
            description: "Default Description".to_string(),
            needs_spare: true,
        }
    }
}

pub fn find_part_by_name<'parts>(parts: &'parts [Part], name: &str) -> Option<&'parts Part> {
    let matched_part = parts
        .iter()
        .find(|&part| part.name.eq(name));
    matched_part
}

#[cfg(test)]
mod find_part_by_name_tests {
    use super::*;

    #[test]
    fn find_matching_part() {
        // given
        let parts = [
            Part::new("chain".to_string(), "10-speed".to_string(), true),
            Part::new("tire_size".to_string(), "23".to_string(), true),
        ];

        // when
        let matched_part = find_part_by_name(&parts, "tire_size");

        // then
        assert_eq!(matched_part, Some(&parts[1]));
    }

    #[test]
    fn find_without_matching_part() {
        // given
        let parts = [Part::new(
            "chain".to_string(),
            "10-speed".to_string(),
            true,
        )];

        // when
        let matched_part = find_part_by_name(&parts, "handlebar_tape");

        // then
        assert_eq!(matched_part, None);
    }

    #[test]
    fn find_first_of_duplicates() {
        // given
        let parts = [
            Part::new("chain".to_string(), "10-speed".to_string(), true),
            Part::new("chain".to_string(), "11-speed".to_string(), true),
        ];

        // when
        let matched_part = find_part_by_name(&parts, "chain");

        // then
        assert_eq!(matched_part, Some(&parts[0]));
    }
}
