use serde::Serialize;

/// Elements of the page the controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementId {
    GenSentence,
    GenSentenceAgain,
    Intro,
    ResponseContainer,
    Sentence,
    FeedbackContainer,
    Feedback,
    Yes,
    No,
}

impl ElementId {
    pub const ALL: [ElementId; 9] = [
        ElementId::GenSentence,
        ElementId::GenSentenceAgain,
        ElementId::Intro,
        ElementId::ResponseContainer,
        ElementId::Sentence,
        ElementId::FeedbackContainer,
        ElementId::Feedback,
        ElementId::Yes,
        ElementId::No,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ElementId::GenSentence => "gen-sentence",
            ElementId::GenSentenceAgain => "gen-sentence-again",
            ElementId::Intro => "intro",
            ElementId::ResponseContainer => "response-container",
            ElementId::Sentence => "sentence",
            ElementId::FeedbackContainer => "feedback-container",
            ElementId::Feedback => "feedback",
            ElementId::Yes => "yes",
            ElementId::No => "no",
        }
    }

    pub fn selector(&self) -> String {
        format!("#{}", self.id())
    }
}

/// Snapshot of what the page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub gen_sentence: bool,
    pub gen_sentence_again: bool,
    pub intro: bool,
    pub response_container: bool,
    pub feedback_container: bool,
    pub yes: bool,
    pub no: bool,
    /// Text typed so far into `#sentence`
    pub sentence: String,
    /// Text of `#feedback`
    pub feedback: String,
}

impl Default for View {
    /// The page as loaded: intro and generate button only
    fn default() -> Self {
        Self {
            gen_sentence: true,
            gen_sentence_again: false,
            intro: true,
            response_container: false,
            feedback_container: false,
            yes: false,
            no: false,
            sentence: String::new(),
            feedback: String::new(),
        }
    }
}

impl View {
    /// Whether an element would be displayed. Text elements follow their container.
    pub fn is_visible(&self, element: ElementId) -> bool {
        match element {
            ElementId::GenSentence => self.gen_sentence,
            ElementId::GenSentenceAgain => self.gen_sentence_again,
            ElementId::Intro => self.intro,
            ElementId::ResponseContainer => self.response_container,
            ElementId::Sentence => self.response_container,
            ElementId::FeedbackContainer => self.feedback_container,
            ElementId::Feedback => self.response_container && self.feedback_container,
            ElementId::Yes => self.feedback_container && self.yes,
            ElementId::No => self.feedback_container && self.no,
        }
    }

    /// Clickable controls currently on screen
    pub fn visible_controls(&self) -> Vec<ElementId> {
        [
            ElementId::GenSentence,
            ElementId::GenSentenceAgain,
            ElementId::Yes,
            ElementId::No,
        ]
        .into_iter()
        .filter(|el| self.is_visible(*el))
        .collect()
    }
}
