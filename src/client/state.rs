use crate::client::view::{ElementId, View};
use crate::models::{Feedback, Sentence};

/// Shown next to the reaction buttons
pub const PROMPT_TEXT: &str = "Did this impress your colleagues (or did you find it funny)?";

/// Shown once feedback went through
pub const THANKS_TEXT: &str = "Thanks for the feedback! Generate another!";

/// Identifies one generate request. Completions for older tickets are dropped.
pub type Ticket = u64;

/// Where the page is in the generate/feedback flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet, or the last request failed
    Idle { error: Option<String> },
    Requesting { ticket: Ticket },
    /// The sentence is being typed out; `typed` counts revealed characters
    Displaying { ticket: Ticket, sentence: Sentence, typed: usize },
    AwaitingFeedback {
        ticket: Ticket,
        sentence: Sentence,
        submitting: bool,
        error: Option<String>,
    },
    Thanked { sentence: Sentence },
}

/// Inputs to the controller: user clicks and completions of outbound work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `#gen-sentence` or `#gen-sentence-again`
    Generate,
    /// `#yes` (funny) or `#no`
    React { was_funny: bool },
    SentenceFetched { ticket: Ticket, result: Result<Sentence, String> },
    Typed { ticket: Ticket, chars: usize },
    RevealFinished { ticket: Ticket },
    FeedbackSubmitted { ticket: Ticket, result: Result<(), String> },
}

impl Event {
    /// Map a click on a page element to its event
    pub fn from_click(element: ElementId) -> Option<Event> {
        match element {
            ElementId::GenSentence | ElementId::GenSentenceAgain => Some(Event::Generate),
            ElementId::Yes => Some(Event::React { was_funny: true }),
            ElementId::No => Some(Event::React { was_funny: false }),
            _ => None,
        }
    }
}

/// Outbound work the controller asks its driver to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchSentence { ticket: Ticket },
    Reveal { ticket: Ticket, sentence: Sentence },
    SubmitFeedback { ticket: Ticket, feedback: Feedback },
}

/// The generate/feedback state machine
///
/// Pure: it never performs I/O. Every event returns the commands to run,
/// and the displayed sentence travels inside the phase itself.
#[derive(Debug, Clone)]
pub struct Controller {
    phase: Phase,
    next_ticket: Ticket,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle { error: None },
            next_ticket: 1,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The sentence on screen, if any
    pub fn sentence(&self) -> Option<&Sentence> {
        match &self.phase {
            Phase::Displaying { sentence, .. }
            | Phase::AwaitingFeedback { sentence, .. }
            | Phase::Thanked { sentence } => Some(sentence),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Generate => {
                let ticket = self.next_ticket;
                self.next_ticket += 1;
                tracing::debug!("Requesting sentence (ticket {})", ticket);
                self.phase = Phase::Requesting { ticket };
                vec![Command::FetchSentence { ticket }]
            }

            Event::SentenceFetched { ticket, result } => {
                if self.phase != (Phase::Requesting { ticket }) {
                    tracing::debug!("Dropping stale sentence for ticket {}", ticket);
                    return vec![];
                }
                match result {
                    Ok(sentence) => {
                        self.phase = Phase::Displaying {
                            ticket,
                            sentence: sentence.clone(),
                            typed: 0,
                        };
                        vec![Command::Reveal { ticket, sentence }]
                    }
                    Err(message) => {
                        tracing::warn!("Sentence request failed: {}", message);
                        self.phase = Phase::Idle { error: Some(message) };
                        vec![]
                    }
                }
            }

            Event::Typed { ticket, chars } => {
                if let Phase::Displaying { ticket: current, sentence, typed } = &mut self.phase {
                    if *current == ticket {
                        *typed = chars.min(sentence.as_str().chars().count());
                    }
                }
                vec![]
            }

            Event::RevealFinished { ticket } => {
                if let Phase::Displaying { ticket: current, sentence, .. } = &self.phase {
                    if *current == ticket {
                        self.phase = Phase::AwaitingFeedback {
                            ticket,
                            sentence: sentence.clone(),
                            submitting: false,
                            error: None,
                        };
                    }
                }
                vec![]
            }

            Event::React { was_funny } => match &mut self.phase {
                Phase::AwaitingFeedback { ticket, sentence, submitting, .. } if !*submitting => {
                    *submitting = true;
                    vec![Command::SubmitFeedback {
                        ticket: *ticket,
                        feedback: Feedback::new(sentence.clone(), was_funny),
                    }]
                }
                _ => {
                    tracing::debug!("Ignoring reaction outside of feedback");
                    vec![]
                }
            },

            Event::FeedbackSubmitted { ticket, result } => {
                let Phase::AwaitingFeedback {
                    ticket: current,
                    sentence,
                    submitting,
                    error,
                } = &mut self.phase
                else {
                    return vec![];
                };
                if *current != ticket || !*submitting {
                    return vec![];
                }

                match result {
                    Ok(()) => {
                        self.phase = Phase::Thanked { sentence: sentence.clone() };
                    }
                    Err(message) => {
                        tracing::warn!("Feedback submission failed: {}", message);
                        *error = Some(message);
                        *submitting = false;
                    }
                }
                vec![]
            }
        }
    }

    /// What the page shows in the current phase
    pub fn view(&self) -> View {
        let in_flow = View {
            gen_sentence: false,
            gen_sentence_again: false,
            intro: false,
            response_container: true,
            feedback_container: false,
            yes: false,
            no: false,
            sentence: String::new(),
            feedback: String::new(),
        };

        match &self.phase {
            Phase::Idle { error: None } => View::default(),
            Phase::Idle { error: Some(message) } => View {
                gen_sentence_again: true,
                feedback_container: true,
                feedback: message.clone(),
                ..in_flow
            },
            Phase::Requesting { .. } => in_flow,
            Phase::Displaying { sentence, typed, .. } => View {
                sentence: sentence.as_str().chars().take(*typed).collect(),
                ..in_flow
            },
            Phase::AwaitingFeedback { sentence, error, .. } => View {
                feedback_container: true,
                yes: true,
                no: true,
                sentence: sentence.to_string(),
                feedback: error.clone().unwrap_or_else(|| PROMPT_TEXT.to_string()),
                ..in_flow
            },
            Phase::Thanked { sentence } => View {
                gen_sentence_again: true,
                feedback_container: true,
                sentence: sentence.to_string(),
                feedback: THANKS_TEXT.to_string(),
                ..in_flow
            },
        }
    }
}
