mod completion;
mod endpoint;
mod template;

pub use completion::{Completion, StructuredPost};
pub use endpoint::{Endpoint, SamplingParams, ENDPOINTS};
pub use template::{Template, UnknownTemplate};

#[cfg(test)]
pub(crate) use endpoint::find_endpoint;
