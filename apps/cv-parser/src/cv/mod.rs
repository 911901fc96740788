// CV extraction: prompt rendering, reply recovery and the record view.
// All LLM calls go through llm_client — nothing here talks to the provider.

pub mod builder;
pub mod prompts;
pub mod record;
pub mod recovery;
pub mod tag;

pub use builder::build_prompt;
pub use record::CandidateRecord;
pub use recovery::{recover_json, Recovery};
pub use tag::ProcessingTag;
