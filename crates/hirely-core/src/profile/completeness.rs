//! Profile completeness score.

use super::field::ProfileField;

/// Fields counted by the completeness score.
pub const COMPLETENESS_FIELDS: [ProfileField; 7] = [
    ProfileField::FirstName,
    ProfileField::LastName,
    ProfileField::Phone,
    ProfileField::Location,
    ProfileField::Bio,
    ProfileField::JobTitle,
    ProfileField::ExperienceLevel,
];

/// Percentage of `values` that are non-empty after trimming, rounded to the
/// nearest integer. An empty input scores 0.
pub fn completeness_score<'a, I>(values: I) -> u8
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let (filled, total) = values.into_iter().fold((0u32, 0u32), |(filled, total), value| {
        let is_filled = value.is_some_and(|text| !text.trim().is_empty());
        (filled + u32::from(is_filled), total + 1)
    });

    if total == 0 {
        return 0;
    }

    ((f64::from(filled) / f64::from(total)) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileRecord;

    fn record_with(filled: usize) -> ProfileRecord {
        let mut record = ProfileRecord::new("user-1");
        let slots = [
            &mut record.first_name,
            &mut record.last_name,
            &mut record.phone,
            &mut record.location,
            &mut record.bio,
            &mut record.job_title,
            &mut record.experience_level,
        ];
        for slot in slots.into_iter().take(filled) {
            *slot = Some("set".to_string());
        }
        record
    }

    #[test]
    fn test_score_for_every_fill_count() {
        for k in 0..=7 {
            let expected = ((k as f64 / 7.0) * 100.0).round() as u8;
            assert_eq!(record_with(k).completeness(), expected, "k = {k}");
        }
        assert_eq!(record_with(0).completeness(), 0);
        assert_eq!(record_with(7).completeness(), 100);
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let mut record = record_with(7);
        record.bio = Some("   \t".to_string());
        assert_eq!(record.completeness(), 86);
    }

    #[test]
    fn test_fields_outside_subset_are_ignored() {
        let mut record = ProfileRecord::new("user-1");
        record.company = Some("Acme".to_string());
        record.linkedin_url = Some("https://linkedin.com/in/ana".to_string());
        assert_eq!(record.completeness(), 0);
    }

    #[test]
    fn test_mixed_profile_scores_43() {
        let record = ProfileRecord {
            id: "user-1".to_string(),
            first_name: Some("Ana".to_string()),
            last_name: Some(String::new()),
            phone: Some("555".to_string()),
            location: Some(String::new()),
            bio: Some(String::new()),
            job_title: Some("Engineer".to_string()),
            experience_level: Some(String::new()),
            ..ProfileRecord::default()
        };

        assert_eq!(record.completeness(), 43);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(completeness_score(std::iter::empty()), 0);
    }
}
