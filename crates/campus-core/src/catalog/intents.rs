use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::intent::IntentDefinition;

/// The two disjoint intent catalogs. Non-domain intents are tested first,
/// in declared order; the first pattern hit wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentCatalog {
    pub non_domain: Vec<IntentDefinition>,
    pub domain: Vec<IntentDefinition>,
}

impl IntentCatalog {
    /// Intent names must be unique across both catalogs.
    pub fn check_unique(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for def in self.non_domain.iter().chain(self.domain.iter()) {
            if !seen.insert(def.name.as_str()) {
                return Err(CatalogError::DuplicateIntent {
                    name: def.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&IntentDefinition> {
        self.non_domain
            .iter()
            .chain(self.domain.iter())
            .find(|d| d.name == name)
    }
}

impl Default for IntentCatalog {
    fn default() -> Self {
        Self {
            non_domain: default_non_domain(),
            domain: default_domain(),
        }
    }
}

/// Conversational intents. Patterns run against the normalized query, which
/// is lower-case with punctuation replaced by spaces.
fn default_non_domain() -> Vec<IntentDefinition> {
    vec![
        IntentDefinition::patterns(
            "greeting",
            100,
            &[
                r"^(hi|hello|hey|hiya|howdy|greetings|good (morning|afternoon|evening|day))( there)?( assistant| bot)?$",
                r"^how are you( doing)?( today)?$",
                r"^(what s up|whats up|sup|yo)$",
            ],
        ),
        IntentDefinition::patterns(
            "joke",
            95,
            &[
                r"\bjokes?\b",
                r"\bmake me laugh\b",
                r"\bsomething funny\b",
                r"\bfunny (story|stories)\b",
            ],
        ),
        IntentDefinition::patterns(
            "weather",
            90,
            &[r"\bweather\b", r"\b(forecast|raining|sunny)\b"],
        ),
        IntentDefinition::patterns(
            "gratitude",
            90,
            &[r"^(ok |okay )?(thanks|thank you|thank you so much|thanks a lot|cheers)$"],
        ),
        IntentDefinition::patterns(
            "farewell",
            90,
            &[r"^(bye|goodbye|bye bye|see you|see you later|good night)$"],
        ),
        IntentDefinition::patterns(
            "creative",
            85,
            &[
                r"\b(poem|poems|poetry|lyrics|riddle)\b",
                r"\b(tell|write) me an? (short )?story\b",
                r"\bwrite (me )?an? (essay|song)\b",
            ],
        ),
        IntentDefinition::patterns(
            "philosophy",
            80,
            &[r"\bmeaning of life\b", r"\bdo you believe in\b", r"^what is love$"],
        ),
        IntentDefinition::patterns(
            "assistant_identity",
            80,
            &[
                r"\babout yourself\b",
                r"\b(who|what) are you\b",
                r"\byour name\b",
                r"\bwho (made|created|built) you\b",
                r"^what can you do$",
                r"\bare you (a )?(robot|human|bot|real)\b",
            ],
        ),
    ]
}

/// University intents, scored by whole-word keyword hits.
fn default_domain() -> Vec<IntentDefinition> {
    vec![
        IntentDefinition::keywords(
            "admissions",
            25,
            &[
                "admission", "admissions", "apply", "application", "entry", "requirements",
                "qualify", "acceptance", "enroll", "enrollment", "join", "admit", "intake",
                "entry requirements", "how to apply", "application process", "entry points",
                "admission letter", "acceptance letter", "cutoff points", "minimum requirements",
            ],
            &["admissions", "administrative"],
        ),
        IntentDefinition::keywords(
            "academics",
            20,
            &[
                "course", "program", "degree", "curriculum", "syllabus", "module", "lecture",
                "class", "timetable", "schedule", "exam", "test", "assessment", "academic",
                "study", "learning", "semester", "trimester", "credit", "gpa", "results",
                "grades", "transcript", "retake", "supplementary", "coursework",
            ],
            &["academic", "courses"],
        ),
        IntentDefinition::keywords(
            "fees",
            25,
            &[
                "fee", "fees", "tuition", "payment", "cost", "price", "pay", "billing",
                "invoice", "amount", "money", "charge", "how much", "expense", "financial",
                "installment", "balance", "owe", "debt", "payment plan", "pay structure",
                "functional fees", "caution fees", "registration fees",
            ],
            &["fees", "administrative"],
        ),
        IntentDefinition::keywords(
            "scholarships",
            25,
            &[
                "scholarship", "bursary", "financial aid", "grant", "sponsorship", "funding",
                "loan", "student loan", "helb", "allowance", "stipend", "discount", "waiver",
                "free education", "government sponsorship",
            ],
            &["fees", "administrative"],
        ),
        IntentDefinition::keywords(
            "campus_life",
            15,
            &[
                "campus", "life", "club", "society", "guild", "event", "activity", "sports",
                "recreation", "entertainment", "cafeteria", "dining", "food", "chapel",
                "church", "worship", "fellowship", "library", "facility", "gym", "swimming",
                "football", "basketball", "volleyball",
            ],
            &["campus"],
        ),
        IntentDefinition::keywords(
            "hostel",
            20,
            &[
                "hostel", "accommodation", "housing", "room", "dormitory", "residence",
                "lodge", "rental", "rent", "bedspace", "roommate", "off-campus", "on-campus",
                "booking", "reservation", "hostel fees", "hostel booking", "warden",
            ],
            &["campus", "administrative"],
        ),
        IntentDefinition::keywords(
            "faculty",
            15,
            &[
                "faculty", "school", "department", "dean", "professor", "lecturer",
                "instructor", "teacher", "staff", "department of", "faculty of", "business",
                "education", "theology", "science", "nursing", "medicine", "agriculture",
                "engineering", "computing", "ict", "law",
            ],
            &["academic", "administrative"],
        ),
        IntentDefinition::keywords(
            "programs",
            20,
            &[
                "bachelor", "masters", "diploma", "certificate", "phd", "doctorate",
                "postgraduate", "undergraduate", "degree program", "course offerings",
                "what programs", "available courses", "offered programs", "study options",
                "bba", "bcom", "bed", "bsc", "mba", "med", "msc",
            ],
            &["courses", "academic"],
        ),
        IntentDefinition::keywords(
            "registration",
            20,
            &[
                "register", "registration", "sign up", "enlist", "student id", "id card",
                "re-register", "course registration", "unit registration", "add course",
                "drop course", "change course", "course selection", "registration deadline",
                "late registration", "registration process", "how to register",
            ],
            &["administrative", "academic"],
        ),
        IntentDefinition::keywords(
            "graduation",
            20,
            &[
                "graduate", "graduation", "clearance", "convocation", "ceremony", "gown",
                "degree certificate", "completion", "final year", "graduation requirements",
                "graduation fee", "graduation list", "alumni", "graduation date",
                "graduation process", "how to graduate",
            ],
            &["academic", "administrative"],
        ),
        IntentDefinition::keywords(
            "support",
            20,
            &[
                "help", "support", "assistance", "problem", "issue", "error", "bug",
                "complaint", "feedback", "contact", "reach", "email", "phone", "call",
                "office", "desk", "counseling", "guidance", "advising", "mentor",
                "ict support", "technical support", "portal help", "system help", "portal",
            ],
            &["technical", "administrative"],
        ),
        IntentDefinition::keywords(
            "emergency",
            30,
            &[
                "emergency", "urgent", "critical", "immediate", "crisis", "security",
                "accident", "medical", "health", "sick", "hospital", "clinic", "doctor",
                "nurse", "ambulance", "fire", "police", "safety", "danger", "threat",
            ],
            &["campus", "other"],
        ),
        IntentDefinition::keywords(
            "administration",
            20,
            &[
                "vice chancellor", "vc", "chancellor", "registrar", "president", "director",
                "administration", "management", "principal",
            ],
            &["administrative"],
        ),
        IntentDefinition::keywords(
            "general",
            10,
            &[
                "university", "bugema", "location", "located", "address", "hours", "open",
                "history", "mission", "vision", "motto", "founded", "directions",
            ],
            &["other", "campus"],
        ),
    ]
}
