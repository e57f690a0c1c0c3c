use crate::client::api::{ClientError, ProxyClient, SentenceApi};
use crate::client::state::{Command, Controller, Event};
use crate::client::typing::Typewriter;
use crate::client::view::{ElementId, View};
use crate::config::ClientSettings;
use crate::services::upstream::{FETCH_ERROR_MESSAGE, SUBMIT_ERROR_MESSAGE};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Event produced by a running command; `last` marks the command's final event
#[derive(Debug)]
struct Completion {
    event: Event,
    last: bool,
}

/// Runs a [`Controller`] against a [`SentenceApi`]
///
/// Each command becomes a tokio task that reports back over a channel, so
/// state changes only happen in [`Driver::dispatch`] and [`Driver::step`].
pub struct Driver<A: SentenceApi + 'static> {
    api: Arc<A>,
    controller: Controller,
    type_delay: Duration,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl Driver<ProxyClient> {
    /// Driver talking to the configured proxy over HTTP
    pub fn connect(settings: &ClientSettings, timeout: Duration) -> Result<Self, ClientError> {
        let api = ProxyClient::new(settings.proxy_url.clone(), timeout)?;
        Ok(Self::new(Arc::new(api), Duration::from_millis(settings.type_speed_ms)))
    }
}

impl<A: SentenceApi + 'static> Driver<A> {
    pub fn new(api: Arc<A>, type_delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            controller: Controller::new(),
            type_delay,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn view(&self) -> View {
        self.controller.view()
    }

    /// Commands still running
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Feed a user event to the controller and start whatever it asks for
    pub fn dispatch(&mut self, event: Event) {
        for command in self.controller.handle(event) {
            self.spawn(command);
        }
    }

    /// Click an element; clicks on non-controls do nothing
    pub fn click(&mut self, element: ElementId) {
        if let Some(event) = Event::from_click(element) {
            self.dispatch(event);
        }
    }

    /// Apply the next completion. Returns false once nothing is running.
    pub async fn step(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        let Some(completion) = self.rx.recv().await else {
            return false;
        };
        if completion.last {
            self.in_flight -= 1;
        }
        self.dispatch(completion.event);
        true
    }

    /// Run until every outstanding command, and anything it triggered, is done
    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    fn spawn(&mut self, command: Command) {
        self.in_flight += 1;
        let tx = self.tx.clone();
        let api = Arc::clone(&self.api);
        let delay = self.type_delay;

        tokio::spawn(async move {
            let send = |event: Event, last: bool| {
                // The receiver only goes away with the driver
                let _ = tx.send(Completion { event, last });
            };

            match command {
                Command::FetchSentence { ticket } => {
                    let result = api
                        .fetch_sentence()
                        .await
                        .map_err(|e| e.user_message(FETCH_ERROR_MESSAGE));
                    send(Event::SentenceFetched { ticket, result }, true);
                }
                Command::Reveal { ticket, sentence } => {
                    let typewriter = Typewriter::new(sentence.as_str(), delay);
                    let instant = typewriter.is_instant();
                    for chars in typewriter {
                        if !instant {
                            tokio::time::sleep(delay).await;
                        }
                        send(Event::Typed { ticket, chars }, false);
                    }
                    send(Event::RevealFinished { ticket }, true);
                }
                Command::SubmitFeedback { ticket, feedback } => {
                    let result = api
                        .submit_feedback(&feedback)
                        .await
                        .map_err(|e| e.user_message(SUBMIT_ERROR_MESSAGE));
                    send(Event::FeedbackSubmitted { ticket, result }, true);
                }
            }
        });
    }
}
