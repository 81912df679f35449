use thiserror::Error;

use crate::NodeId;

/// Rejections from a DOM host. The navigation layer logs these and carries
/// on; they never reach the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("node {0:?} is not part of the element tree")]
    UnknownNode(NodeId),
    #[error("node {0:?} cannot take focus")]
    NotFocusable(NodeId),
    #[error("node {0:?} is not a scroll container")]
    NotScrollable(NodeId),
}
