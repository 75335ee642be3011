//! Cache key scheme. Changing these strings orphans every entry written by a
//! previous deploy, so they stay fixed.

use crate::domain::article::ExternalPostRef;

pub const LIST_KEY: &str = "list:all";

pub fn content_key(target: &ExternalPostRef) -> String {
    format!("content:{}:{}", target.workspace, target.post_id)
}

pub fn metadata_key(target: &ExternalPostRef) -> String {
    format!("metadata:{}:{}", target.workspace, target.post_id)
}
