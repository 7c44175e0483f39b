use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::BoardError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    // the server sends the name as the map key, not as a field
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub max_participants: u32,
}

impl Activity {
    /// "taken/max", e.g. "1/12".
    pub fn capacity(&self) -> String {
        format!("{}/{}", self.participants.len(), self.max_participants)
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Activities keyed by name, in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activities(Vec<Activity>);

impl Activities {
    pub fn from_json(body: &str) -> Result<Self, BoardError> {
        let raw: Map<String, Value> = serde_json::from_str(body)?;
        let mut out = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let mut activity: Activity = serde_json::from_value(value)?;
            activity.name = name;
            out.push(activity);
        }
        Ok(Self(out))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|a| a.name.as_str())
    }
}

impl From<Vec<Activity>> for Activities {
    fn from(list: Vec<Activity>) -> Self {
        Self(list)
    }
}

/// Email + activity pair taken from the form (or a participant row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub activity: String,
}

impl SignupRequest {
    pub fn from_form(email: &str, activity: &str) -> Result<Self, BoardError> {
        let email = email.trim();
        let activity = activity.trim();
        if email.is_empty() {
            return Err(BoardError::MissingField("email"));
        }
        if activity.is_empty() {
            return Err(BoardError::MissingField("activity"));
        }
        Ok(Self {
            email: email.to_string(),
            activity: activity.to_string(),
        })
    }

    /// A row of an activity's participant list, sent back exactly as the server listed it.
    pub fn for_participant(activity: &str, email: &str) -> Self {
        Self {
            email: email.to_string(),
            activity: activity.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(list: &'a Activities, name: &str) -> &'a Activity {
        list.iter().find(|a| a.name == name).unwrap()
    }

    const SAMPLE: &str = r#"{
        "Programming Class": {
            "description": "Learn programming fundamentals",
            "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            "max_participants": 20,
            "participants": ["emma@mergington.edu", "sophia@mergington.edu"]
        },
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu"]
        },
        "Art Studio": {
            "description": "Painting and drawing",
            "schedule": "Mondays, 4:00 PM - 5:30 PM",
            "max_participants": 15
        }
    }"#;

    #[test]
    fn keeps_server_key_order() {
        let list = Activities::from_json(SAMPLE).unwrap();
        let names: Vec<&str> = list.names().collect();
        assert_eq!(names, ["Programming Class", "Chess Club", "Art Studio"]);
    }

    #[test]
    fn name_comes_from_map_key() {
        let list = Activities::from_json(SAMPLE).unwrap();
        let chess = find(&list, "Chess Club");
        assert_eq!(chess.name, "Chess Club");
        assert_eq!(chess.max_participants, 12);
        assert_eq!(chess.participants, vec!["michael@mergington.edu"]);
    }

    #[test]
    fn missing_participants_means_none() {
        let list = Activities::from_json(SAMPLE).unwrap();
        let art = find(&list, "Art Studio");
        assert!(art.participants.is_empty());
        assert_eq!(art.capacity(), "0/15");
    }

    #[test]
    fn capacity_and_spots_left() {
        let list = Activities::from_json(SAMPLE).unwrap();
        let prog = find(&list, "Programming Class");
        assert_eq!(prog.capacity(), "2/20");
        assert_eq!(prog.spots_left(), 18);
    }

    #[test]
    fn overfull_activity_has_no_spots() {
        let a = Activity {
            name: "Tiny".into(),
            description: String::new(),
            schedule: String::new(),
            participants: vec!["a@x.com".into(), "b@x.com".into()],
            max_participants: 1,
        };
        assert_eq!(a.spots_left(), 0);
        assert_eq!(a.capacity(), "2/1");
    }

    #[test]
    fn empty_object_is_empty_collection() {
        let list = Activities::from_json("{}").unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(
            Activities::from_json("<html>oops</html>"),
            Err(BoardError::Decode(_))
        ));
        assert!(matches!(
            Activities::from_json(r#"{"Chess Club": {"description": "x"}}"#),
            Err(BoardError::Decode(_))
        ));
    }

    #[test]
    fn form_fields_are_required_and_trimmed() {
        assert_eq!(
            SignupRequest::from_form("", "Chess Club"),
            Err(BoardError::MissingField("email"))
        );
        assert_eq!(
            SignupRequest::from_form("a@x.com", "  "),
            Err(BoardError::MissingField("activity"))
        );
        let req = SignupRequest::from_form(" a@x.com ", "Chess Club").unwrap();
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.activity, "Chess Club");
    }

    #[test]
    fn participant_rows_are_taken_verbatim() {
        let req = SignupRequest::for_participant("Chess Club", " a@x.com ");
        assert_eq!(req.email, " a@x.com ");
        assert_eq!(SignupRequest::for_participant("Chess Club", "").email, "");
    }
}
