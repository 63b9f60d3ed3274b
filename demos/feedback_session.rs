//! A short feedback session against a file-backed store, standing in for the
//! dashboard page of the original widget suite.

use std::collections::HashMap;
use std::time::SystemTime;

use feedback_core::{
    AnswerValue, FeedbackKind, FeedbackStore, FileStateStore, LocalEmitterBus, NewFeedback,
    QuestionType, Survey, SurveyQuestion,
};

fn demo_survey() -> Survey {
    Survey {
        id: "demo-survey".into(),
        title: "Experiencia NewCool".into(),
        description: "Ayudanos a entender como mejorar tu experiencia".into(),
        questions: vec![
            SurveyQuestion {
                id: "q1".into(),
                kind: QuestionType::Emoji,
                question: "Como te sientes usando NewCool?".into(),
                required: true,
                options: None,
                min_label: None,
                max_label: None,
            },
            SurveyQuestion {
                id: "q2".into(),
                kind: QuestionType::MultipleChoice,
                question: "Cual es tu funcionalidad favorita?".into(),
                required: true,
                options: Some(vec![
                    "Musica educativa".into(),
                    "Mini juegos".into(),
                    "Karaoke".into(),
                    "Dashboard evolutivo".into(),
                    "Comunidad".into(),
                ]),
                min_label: None,
                max_label: None,
            },
            SurveyQuestion {
                id: "q3".into(),
                kind: QuestionType::Text,
                question: "Que te gustaria ver en NewCool?".into(),
                required: false,
                options: None,
                min_label: None,
                max_label: None,
            },
        ],
        created_at: SystemTime::now(),
        expires_at: None,
        is_active: true,
        target_audience: None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("newcool-feedback-demo");
    let storage = FileStateStore::new(&dir)?;

    let bus = LocalEmitterBus::new();
    bus.on("NPS_SUBMITTED", |payload| {
        println!("[bus] NPS_SUBMITTED {}", payload);
    });
    bus.on("FEEDBACK_SUBMITTED", |payload| {
        println!("[bus] FEEDBACK_SUBMITTED {}", payload);
    });

    let mut store = FeedbackStore::open(Box::new(storage), Box::new(bus))?;

    store.submit_nps(
        9,
        Some("Muy buena experiencia".into()),
        Some("dashboard".into()),
    )?;
    store.submit_nps(7, None, Some("dashboard".into()))?;
    store.submit_nps(4, Some("El karaoke se traba".into()), Some("dashboard".into()))?;

    store.submit_feedback(NewFeedback {
        kind: FeedbackKind::Suggestion,
        title: "Mas canciones".into(),
        content: "Agreguen mas canciones al karaoke".into(),
        tags: Some(vec!["karaoke".into()]),
        user_id: None,
    })?;
    let newest = store.feedback_items()[0].id.clone();
    store.vote_feedback(&newest)?;

    let survey = demo_survey();
    let mut answers = HashMap::new();
    answers.insert("q1".to_string(), AnswerValue::Number(5));
    answers.insert("q2".to_string(), AnswerValue::Text("Karaoke".to_string()));
    survey.check_answers(&answers)?;
    store.submit_survey_response(survey.id.clone(), answers)?;

    let metrics = store.metrics();
    println!(
        "NPS {} | {} promoters / {} passives / {} detractors ({} responses)",
        metrics.nps_score,
        metrics.promoters,
        metrics.passives,
        metrics.detractors,
        metrics.total_responses
    );
    println!(
        "{} feedback item(s), {} survey response(s), state in {}",
        store.feedback_items().len(),
        store.survey_responses().len(),
        dir.display()
    );

    store.flush()?;
    Ok(())
}
