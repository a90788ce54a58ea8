//! Questionnaire editor core: the in-memory section/question tree, the
//! submission gate, payload building, and default-answer reconciliation.

pub mod ids;
pub mod msg;
pub mod payload;
pub mod reconcile;
pub mod save;
pub mod tree;
pub mod validate;

pub use ids::{TempId, TempIdGen};
pub use msg::EditorMsg;
pub use payload::{build_create_payload, build_update_payload};
pub use reconcile::{AnswerOp, SyncReport, plan_answer_sync, run_answer_sync};
pub use save::{SaveOutcome, save_draft};
pub use tree::{QuestionNode, QuestionnaireDraft, SectionNode};
pub use validate::{ValidationError, validate};
