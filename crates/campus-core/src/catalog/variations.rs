use serde::{Deserialize, Serialize};

/// A base word and the phrasings treated as its variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseVariation {
    pub base: String,
    pub variations: Vec<String>,
}

/// Hand-authored rule for a known high-traffic confusion.
///
/// Matches when every group in `query_groups` has at least one term in the
/// query and every term in `keyword_terms` is in the keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundRule {
    pub name: String,
    pub query_groups: Vec<Vec<String>>,
    pub keyword_terms: Vec<String>,
}

/// Question-shape regexes that apply to keywords containing `keyword`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPatternRule {
    pub keyword: String,
    pub patterns: Vec<String>,
}

/// Tables driving the rule-based variation matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationRules {
    pub base_variations: Vec<BaseVariation>,
    pub compound_rules: Vec<CompoundRule>,
    pub question_patterns: Vec<QuestionPatternRule>,
    /// Words earning a bonus in `variation_score` when present on both sides.
    pub ranking_words: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn base(word: &str, variations: &[&str]) -> BaseVariation {
    BaseVariation {
        base: word.to_string(),
        variations: strings(variations),
    }
}

fn compound(name: &str, query_groups: &[&[&str]], keyword_terms: &[&str]) -> CompoundRule {
    CompoundRule {
        name: name.to_string(),
        query_groups: query_groups.iter().map(|g| strings(g)).collect(),
        keyword_terms: strings(keyword_terms),
    }
}

fn question(keyword: &str, patterns: &[&str]) -> QuestionPatternRule {
    QuestionPatternRule {
        keyword: keyword.to_string(),
        patterns: strings(patterns),
    }
}

impl Default for VariationRules {
    fn default() -> Self {
        Self {
            base_variations: vec![
                base("library", &["book", "study", "reading", "resource", "where is", "location", "find", "directions to", "how to get to"]),
                base("location", &["where", "find", "directions to", "how to get to", "place", "situated", "located"]),
                base("hours", &["when", "open", "close", "schedule", "timing", "time", "operating", "working hours"]),
                base("admission", &["apply", "application", "entry", "join", "enroll", "admit", "admission", "requirements", "criteria"]),
                base("fee", &["cost", "price", "payment", "tuition", "charge", "pay", "financial", "money", "how much"]),
                base("course", &["program", "subject", "study", "major", "degree", "degrees", "what can i study", "available", "offer", "curriculum"]),
                base("hostel", &["dorm", "accommodation", "housing", "residence", "stay", "living", "room"]),
                base("scholarship", &["bursary", "financial aid", "funding", "grant", "sponsorship", "award"]),
                base("contact", &["phone", "email", "address", "location", "reach", "call", "number", "get in touch", "how to contact"]),
                base("vc", &["vice chancellor", "chancellor", "president", "head", "leader", "director"]),
                base("warden", &["supervisor", "manager", "head of hostel", "dorm manager", "hostel supervisor"]),
                base("registration", &["enrollment", "signup", "registering", "enrol", "sign up", "course registration"]),
                base("exam", &["test", "assessment", "evaluation", "paper", "examination"]),
                base("graduation", &["completion", "finishing", "convocation", "ceremony", "graduate", "finish studies"]),
                base("portal", &["website", "online system", "platform", "login", "student portal", "academic portal"]),
                base("medical", &["health", "clinic", "hospital", "healthcare", "doctor", "nurse", "treatment"]),
                base("international", &["foreign", "overseas", "abroad", "global", "visa", "passport", "exchange student"]),
                base("bensdoff", &["hostel", "dormitory", "residence", "accommodation"]),
                base("bugema", &["university", "college", "institution", "campus", "school"]),
                base("student", &["learner", "pupil", "undergraduate", "graduate", "scholar"]),
                base("university", &["college", "institution", "campus", "school", "academy"]),
            ],
            compound_rules: vec![
                compound("library location", &[&["where"], &["library"]], &["library", "location"]),
                compound(
                    "library hours",
                    &[&["when", "what time"], &["library"], &["open", "close"]],
                    &["library", "hours"],
                ),
            ],
            question_patterns: vec![
                question("library location", &[r"where.*library", r"library.*where", r"find.*library", r"library.*location", r"location.*library", r"directions.*library", r"how.*get.*library"]),
                question("library hours", &[r"when.*library.*open", r"library.*open.*when", r"what.*time.*library", r"library.*hours", r"hours.*library", r"library.*schedule", r"when.*does.*library"]),
                question("admission requirements", &[r"how.*apply", r"apply.*how", r"admission.*requirements", r"requirements.*admission", r"how.*get.*admission", r"admission.*process", r"entry.*requirements"]),
                question("tuition fees", &[r"how.*much.*fee", r"fee.*how.*much", r"tuition.*cost", r"cost.*tuition", r"how.*much.*pay", r"payment.*details", r"fee.*structure"]),
                question("contact information", &[r"how.*contact", r"contact.*how", r"phone.*number", r"email.*address", r"university.*address", r"how.*reach", r"get.*in.*touch"]),
            ],
            ranking_words: strings(&["library", "admission", "fee", "course", "contact", "hostel", "scholarship"]),
        }
    }
}
