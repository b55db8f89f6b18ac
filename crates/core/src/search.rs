//! Client-side search over a loaded contact list.
//!
//! The filtered view is always a subsequence of the loaded list in its
//! original order. A blank query keeps every contact.

use crate::types::Contact;

/// Filter `contacts` by `query`, preserving order.
///
/// A blank (empty or whitespace-only) query returns every contact.
/// Otherwise a contact is kept when the lowercased query is a substring of
/// its name (`"given family"`), its first email, or its first phone number.
/// Phone numbers are matched literally, without normalizing punctuation.
#[must_use]
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.trim().is_empty() {
        return contacts.iter().collect();
    }

    let query = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| matches_lowercase(contact, &query))
        .collect()
}

/// Whether a single contact matches `query`.
///
/// A blank query matches every contact.
#[must_use]
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    query.trim().is_empty() || matches_lowercase(contact, &query.to_lowercase())
}

fn matches_lowercase(contact: &Contact, query: &str) -> bool {
    let name = format!(
        "{} {}",
        contact.given_name.as_deref().unwrap_or(""),
        contact.family_name.as_deref().unwrap_or("")
    )
    .to_lowercase();
    let email = contact.primary_email().unwrap_or("").to_lowercase();
    let phone = contact.primary_phone().unwrap_or("").to_lowercase();

    name.contains(query) || email.contains(query) || phone.contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContactId, EmailAddress, PhoneNumber};

    fn contact(id: i64, given: &str, family: &str, email: &str, phone: &str) -> Contact {
        let mut contact = Contact::new(ContactId::new(id));
        if !given.is_empty() {
            contact.given_name = Some(given.to_string());
        }
        if !family.is_empty() {
            contact.family_name = Some(family.to_string());
        }
        if !email.is_empty() {
            contact.email_addresses.push(EmailAddress {
                email: email.to_string(),
                field: Some("EMAIL1".to_string()),
            });
        }
        if !phone.is_empty() {
            contact.phone_numbers.push(PhoneNumber {
                number: phone.to_string(),
                field: Some("PHONE1".to_string()),
            });
        }
        contact
    }

    fn sample() -> Vec<Contact> {
        vec![
            contact(1, "Ada", "Lovelace", "ada@engines.org", "555-111-2222"),
            contact(2, "Grace", "Hopper", "grace@navy.mil", "5553334444"),
            contact(3, "", "", "", ""),
            contact(4, "Alan", "Turing", "alan@bletchley.uk", "(555) 999-0000"),
        ]
    }

    fn ids(contacts: &[&Contact]) -> Vec<i64> {
        contacts.iter().map(|c| c.id.as_i64()).collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let contacts = sample();
        assert_eq!(ids(&filter_contacts(&contacts, "")), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter_contacts(&contacts, "   \t")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let contacts = sample();
        assert_eq!(ids(&filter_contacts(&contacts, "HOPPER")), vec![2]);
        assert_eq!(ids(&filter_contacts(&contacts, "ada love")), vec![1]);
    }

    #[test]
    fn test_email_match() {
        let contacts = sample();
        assert_eq!(ids(&filter_contacts(&contacts, "Navy.MIL")), vec![2]);
    }

    #[test]
    fn test_phone_match_is_literal() {
        let contacts = sample();
        assert_eq!(ids(&filter_contacts(&contacts, "111-2222")), vec![1]);
        // Digits are not normalized, so a dashed query misses an undashed number.
        assert!(filter_contacts(&contacts, "555-333").is_empty());
        assert_eq!(ids(&filter_contacts(&contacts, "5553334")), vec![2]);
    }

    #[test]
    fn test_only_first_email_is_searched() {
        let mut contacts = sample();
        contacts[0].email_addresses.push(EmailAddress {
            email: "secondary@elsewhere.com".to_string(),
            field: Some("EMAIL2".to_string()),
        });
        assert!(filter_contacts(&contacts, "elsewhere").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let contacts = sample();
        for query in ["a", "555", "o", "zzz", " ", "@"] {
            let filtered = filter_contacts(&contacts, query);
            let mut remaining = contacts.iter();
            for kept in &filtered {
                assert!(
                    remaining.any(|c| std::ptr::eq(c, *kept)),
                    "query {query:?} broke ordering"
                );
            }
        }
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let contacts = sample();
        // The space between given and family name is part of the haystack.
        assert_eq!(ids(&filter_contacts(&contacts, "grace ")), vec![2]);
        assert!(filter_contacts(&contacts, " ada").is_empty());
    }

    #[test]
    fn test_matches_query() {
        let contacts = sample();
        assert!(matches_query(&contacts[3], "turing"));
        assert!(!matches_query(&contacts[3], "hopper"));
        assert!(matches_query(&contacts[2], ""));
    }
}
