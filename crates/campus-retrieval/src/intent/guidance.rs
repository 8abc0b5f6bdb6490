//! Follow-up guidance for a classified intent: suggested questions, priority,
//! and whether a human should take over.

use serde::{Deserialize, Serialize};

/// Handling priority of an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl IntentPriority {
    pub fn for_intent(intent: &str) -> Self {
        match intent {
            "emergency" => Self::Urgent,
            "support" | "fees" => Self::High,
            "admissions" | "registration" | "graduation" | "academics" | "scholarships" => {
                Self::Medium
            }
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

const GENERAL_SUGGESTIONS: &[&str] = &[
    "Tell me about Bugema University",
    "Where is the campus located?",
    "What are the contact details?",
    "How do I access the student portal?",
];

/// Follow-up questions offered after answering `intent`. Unrecognised
/// intents get general campus questions.
pub fn suggested_questions(intent: &str) -> &'static [&'static str] {
    match intent {
        "admissions" => &[
            "What are the admission requirements?",
            "How do I apply for admission?",
            "When is the next intake?",
            "What are the entry points?",
        ],
        "academics" => &[
            "What courses do you offer?",
            "How do I check my results?",
            "What is the exam timetable?",
            "How do I get my transcript?",
        ],
        "fees" => &[
            "What are the tuition fees?",
            "Can I pay in installments?",
            "How do I check my fee balance?",
            "What payment methods are accepted?",
        ],
        "scholarships" => &[
            "What scholarships are available?",
            "How do I apply for a scholarship?",
            "What are the scholarship requirements?",
            "When do scholarship applications open?",
        ],
        "campus_life" => &[
            "What clubs and societies are available?",
            "Tell me about campus events",
            "What sports facilities do you have?",
            "Where is the library?",
        ],
        "hostel" => &[
            "How do I book a hostel?",
            "What are the hostel fees?",
            "What accommodation options are available?",
            "Can I get off-campus accommodation?",
        ],
        "faculty" => &[
            "What faculties do you have?",
            "Who is the dean of business?",
            "Tell me about the faculty of education",
            "How do I contact a lecturer?",
        ],
        "programs" => &[
            "What degree programs do you offer?",
            "Tell me about the business programs",
            "What is the duration of the programs?",
            "What are the program requirements?",
        ],
        "registration" => &[
            "How do I register for courses?",
            "When is the registration deadline?",
            "How do I get my student ID?",
            "Can I change my registered courses?",
        ],
        "graduation" => &[
            "What are the graduation requirements?",
            "How do I apply for graduation?",
            "When is the graduation ceremony?",
            "How do I get my graduation clearance?",
        ],
        "support" => &[
            "How can I contact ICT support?",
            "Where is the student affairs office?",
            "How do I give feedback?",
            "Who can help me with my issue?",
        ],
        "emergency" => &[
            "What are the emergency contacts?",
            "Where is the medical center?",
            "How do I report a security issue?",
            "What should I do in an emergency?",
        ],
        _ => GENERAL_SUGGESTIONS,
    }
}

/// Emergencies always escalate; so does any classification below 0.3
/// confidence, and support requests below 0.5.
pub fn should_escalate(intent: &str, confidence: f64) -> bool {
    intent == "emergency" || confidence < 0.3 || (intent == "support" && confidence < 0.5)
}
