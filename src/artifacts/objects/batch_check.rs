//! `git cat-file --batch-check` requests that peel ref targets to commits
//!
//! Every request is `<oid>^{commit}` on its own line. git answers each one in
//! order, either with `<commit-oid> commit <size>` or, when the object is not
//! a commit and cannot be peeled to one (trees, blobs, tags of those), with
//! `<request> missing`.

use crate::artifacts::objects::object_id::ObjectId;

/// Arguments of the `git` invocation answering the requests
pub const BATCH_CHECK_ARGS: [&str; 2] = ["cat-file", "--batch-check"];

const COMMIT_TYPE: &str = "commit";

/// One request line asking for the commit `oid` peels to
pub fn peel_request(oid: &ObjectId) -> String {
    format!("{oid}^{{{COMMIT_TYPE}}}\n")
}

/// The commit named by one response line, `None` if there is none
pub fn parse_response(line: &str) -> Option<ObjectId> {
    let mut fields = line.split_whitespace();
    let (oid, object_type) = (fields.next()?, fields.next()?);

    if object_type != COMMIT_TYPE {
        return None;
    }

    ObjectId::try_parse(oid.to_string()).ok()
}
