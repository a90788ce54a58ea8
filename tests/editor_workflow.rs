//! End-to-end exercises of the authoring workflow through the public API:
//! build a draft from events, gate it, and turn it into wire payloads.

use assess_cli::api::models::{DefaultAnswer, QuestionnaireDetail, QuestionnaireStatus};
use assess_cli::editor::{
    AnswerOp, EditorMsg, QuestionnaireDraft, ValidationError, build_create_payload,
    build_update_payload, plan_answer_sync, validate,
};
use serde_json::json;

fn authoring_session() -> QuestionnaireDraft {
    let draft = QuestionnaireDraft::new()
        .apply(EditorMsg::SetName("Social Skills".into()))
        .apply(EditorMsg::SetDescription("Observation battery".into()))
        .apply(EditorMsg::AddSection);
    let communication = draft.sections[0].temp_id;

    let draft = draft
        .apply(EditorMsg::RenameSection {
            section: communication,
            name: "Communication".into(),
        })
        .apply(EditorMsg::AddQuestion {
            section: communication,
        })
        .apply(EditorMsg::AddQuestion {
            section: communication,
        });
    let q1 = draft.sections[0].questions[0].temp_id;
    let q2 = draft.sections[0].questions[1].temp_id;

    draft
        .apply(EditorMsg::SetQuestionText {
            section: communication,
            question: q1,
            text: "Makes eye contact?".into(),
        })
        .apply(EditorMsg::SetQuestionText {
            section: communication,
            question: q2,
            text: "Initiates conversation?".into(),
        })
        .apply(EditorMsg::SetQuestionObservations {
            section: communication,
            question: q2,
            observations: "Observe during free play".into(),
        })
}

#[test]
fn create_flow_from_scratch() {
    let draft = authoring_session();

    assert_eq!(validate(&draft), Ok(()));

    let wire = serde_json::to_value(build_create_payload(&draft)).unwrap();
    assert_eq!(
        wire,
        json!({
            "name": "Social Skills",
            "description": "Observation battery",
            "status": "Draft",
            "sections": [{
                "name": "Communication",
                "order": 0,
                "questions": [
                    { "text": "Makes eye contact?", "order": 0 },
                    {
                        "text": "Initiates conversation?",
                        "observations": "Observe during free play",
                        "order": 1
                    }
                ]
            }]
        })
    );
}

#[test]
fn deleting_a_section_renumbers_the_create_payload() {
    let draft = authoring_session().apply(EditorMsg::AddSection);
    let second = draft.sections[1].temp_id;
    let draft = draft
        .apply(EditorMsg::RenameSection {
            section: second,
            name: "Motor Skills".into(),
        })
        .apply(EditorMsg::AddQuestion { section: second });
    let q = draft.sections[1].questions[0].temp_id;
    let draft = draft.apply(EditorMsg::SetQuestionText {
        section: second,
        question: q,
        text: "Catches a ball?".into(),
    });

    let first = draft.sections[0].temp_id;
    let draft = draft.apply(EditorMsg::DeleteSection { section: first });

    let payload = build_create_payload(&draft);
    assert_eq!(payload.sections.len(), 1);
    assert_eq!(payload.sections[0].name, "Motor Skills");
    assert_eq!(payload.sections[0].order, 0);
}

#[test]
fn validation_blocks_incomplete_drafts_in_order() {
    let draft = QuestionnaireDraft::new();
    assert_eq!(validate(&draft), Err(ValidationError::MissingName));

    let draft = draft.apply(EditorMsg::SetName("Social Skills".into()));
    assert_eq!(validate(&draft), Err(ValidationError::NoContent));

    let draft = draft.apply(EditorMsg::AddSection);
    let section = draft.sections[0].temp_id;
    let draft = draft.apply(EditorMsg::AddQuestion { section });
    assert_eq!(validate(&draft), Err(ValidationError::UnnamedSection));

    let draft = draft.apply(EditorMsg::RenameSection {
        section,
        name: "Communication".into(),
    });
    assert_eq!(validate(&draft), Err(ValidationError::EmptyQuestion));

    let question = draft.sections[0].questions[0].temp_id;
    let draft = draft.apply(EditorMsg::SetQuestionText {
        section,
        question,
        text: "Makes eye contact?".into(),
    });
    assert_eq!(validate(&draft), Ok(()));
}

#[test]
fn edit_flow_hydrates_and_builds_update() {
    // A detail record as the backend serializes it.
    let detail: QuestionnaireDetail = serde_json::from_value(json!({
        "id": 12,
        "name": "Social Skills",
        "description": "Observation battery",
        "status": "Published",
        "createdAt": "2026-04-02T09:30:00Z",
        "sections": [{
            "id": 3,
            "name": "Communication",
            "order": 0,
            "questions": [
                { "id": 10, "text": "Makes eye contact?", "order": 0 },
                { "id": 11, "text": "Initiates conversation?", "order": 1 }
            ]
        }]
    }))
    .unwrap();

    let draft = QuestionnaireDraft::from_detail(&detail);
    assert_eq!(draft.id, Some(12));
    assert_eq!(draft.status, QuestionnaireStatus::Published);
    assert_eq!(draft.total_questions(), 2);

    // Drop a loaded question, add a fresh one.
    let section = draft.sections[0].temp_id;
    let loaded = draft.sections[0].questions[1].temp_id;
    let draft = draft
        .apply(EditorMsg::DeleteQuestion {
            section,
            question: loaded,
        })
        .apply(EditorMsg::AddQuestion { section });
    let added = draft.sections[0].questions[1].temp_id;
    let draft = draft.apply(EditorMsg::SetQuestionText {
        section,
        question: added,
        text: "Waves goodbye?".into(),
    });

    let payload = build_update_payload(&draft, 12);
    assert_eq!(payload.id, 12);
    assert_eq!(payload.status, QuestionnaireStatus::Published);
    assert_eq!(payload.sections[0].id, 3);
    assert_eq!(payload.sections[0].questions[0].id, 10);
    assert_eq!(payload.sections[0].questions[1].id, 0);
    assert_eq!(payload.sections[0].questions[1].text, "Waves goodbye?");
}

#[test]
fn answer_plan_covers_edits_as_delete_plus_create() {
    let answer = |id: i64, label: &str, color: &str| DefaultAnswer {
        id,
        questionnaire_id: 12,
        label: label.into(),
        color: color.into(),
    };

    let server = vec![answer(5, "Yes", "#22c55e"), answer(6, "No", "#ef4444")];
    // "No" was relabeled locally, which shows up as a fresh entry plus the
    // old one going away.
    let local = vec![
        answer(5, "Yes", "#22c55e"),
        answer(0, "Never", "#ef4444"),
        answer(0, "Sometimes", "#eab308"),
    ];

    let plan = plan_answer_sync(&server, &local);
    assert_eq!(plan.len(), 3);
    assert!(matches!(plan[0], AnswerOp::Delete { id: 6, .. }));
    assert!(matches!(plan[1], AnswerOp::Create { ref label, .. } if label == "Never"));
    assert!(matches!(plan[2], AnswerOp::Create { ref label, .. } if label == "Sometimes"));
}
