use burrow_types::{PostId, ProfileId};
use serde::{Deserialize, Serialize};

use crate::error::{ArgsError, ArgsResult};
use crate::stack::{join_ids, split_ids};

/// Argument key carrying the post id in string-only channels
pub const POST_ID_KEY: &str = "postId";

/// Argument key carrying the joined profile stack in string-only channels
pub const PROFILE_STACK_KEY: &str = "profileStack";

/// Arguments handed to a new post detail view.
///
/// `profile_stack` carries the profile overlays that were open on the
/// previous view so the nested navigation continues where it left off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailArgs {
    pub post_id: PostId,
    #[serde(default)]
    pub profile_stack: Vec<ProfileId>,
}

impl PostDetailArgs {
    /// Arguments for a post detail view with no inherited overlays
    pub fn new(post_id: impl Into<PostId>) -> Self {
        Self {
            post_id: post_id.into(),
            profile_stack: Vec::new(),
        }
    }

    pub fn with_profile_stack(post_id: impl Into<PostId>, profile_stack: Vec<ProfileId>) -> Self {
        Self {
            post_id: post_id.into(),
            profile_stack,
        }
    }

    pub fn has_profile_stack(&self) -> bool {
        !self.profile_stack.is_empty()
    }

    pub fn to_json(&self) -> ArgsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> ArgsResult<Self> {
        let args: Self = serde_json::from_str(json)?;
        if args.post_id.is_blank() {
            return Err(ArgsError::MissingPostId);
        }
        Ok(args)
    }

    /// Flatten into `(key, value)` string pairs, joining the stack with commas
    pub fn to_bundle_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (POST_ID_KEY, self.post_id.to_string()),
            (PROFILE_STACK_KEY, join_ids(&self.profile_stack)),
        ]
    }

    /// Rebuild from string fields produced by [`PostDetailArgs::to_bundle_fields`].
    ///
    /// A missing or blank stack field means no inherited overlays.
    pub fn from_bundle_fields(post_id: &str, profile_stack: Option<&str>) -> ArgsResult<Self> {
        let post_id = PostId::from(post_id);
        if post_id.is_blank() {
            return Err(ArgsError::MissingPostId);
        }

        let profile_stack = profile_stack.map(split_ids).unwrap_or_default();
        Ok(Self {
            post_id,
            profile_stack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(ids: &[&str]) -> Vec<ProfileId> {
        ids.iter().map(|id| ProfileId::from(*id)).collect()
    }

    #[test]
    fn test_new_has_no_stack() {
        let args = PostDetailArgs::new("p1");
        assert_eq!(args.post_id, "p1");
        assert!(!args.has_profile_stack());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let args = PostDetailArgs::with_profile_stack("p1", stack(&["u1", "u2"]));
        let json = args.to_json().unwrap();
        assert_eq!(json, r#"{"postId":"p1","profileStack":["u1","u2"]}"#);

        assert_eq!(PostDetailArgs::from_json(&json).unwrap(), args);
    }

    #[test]
    fn test_json_without_stack_defaults_to_empty() {
        let args = PostDetailArgs::from_json(r#"{"postId":"p9"}"#).unwrap();
        assert_eq!(args, PostDetailArgs::new("p9"));
    }

    #[test]
    fn test_malformed_json() {
        let err = PostDetailArgs::from_json("{not json").unwrap_err();
        assert!(matches!(err, ArgsError::Serialization(_)));
    }

    #[test]
    fn test_blank_post_id_rejected() {
        let err = PostDetailArgs::from_json(r#"{"postId":"  "}"#).unwrap_err();
        assert!(matches!(err, ArgsError::MissingPostId));

        let err = PostDetailArgs::from_bundle_fields("", Some("u1")).unwrap_err();
        assert!(matches!(err, ArgsError::MissingPostId));
    }

    #[test]
    fn test_bundle_fields() {
        let args = PostDetailArgs::with_profile_stack("p1", stack(&["u1", "u2", "u3"]));
        let fields = args.to_bundle_fields();
        assert_eq!(
            fields,
            vec![
                (POST_ID_KEY, "p1".to_string()),
                (PROFILE_STACK_KEY, "u1,u2,u3".to_string()),
            ]
        );

        let back =
            PostDetailArgs::from_bundle_fields(&fields[0].1, Some(fields[1].1.as_str())).unwrap();
        assert_eq!(back, args);
    }

    #[test]
    fn test_bundle_fields_without_stack() {
        let args = PostDetailArgs::from_bundle_fields("p1", None).unwrap();
        assert!(!args.has_profile_stack());

        let args = PostDetailArgs::from_bundle_fields("p1", Some(" ")).unwrap();
        assert!(!args.has_profile_stack());
    }
}
