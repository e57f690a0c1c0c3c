// Unit tests for Sentence Site

use rand::rngs::StdRng;
use rand::SeedableRng;
use sentence_site::client::layout::{
    hero_height, scale_banner, Dimensions, HeroLayout, Viewport, HEIGHT_SCALE, WINDOW_CUTOFF,
};
use sentence_site::client::state::{PROMPT_TEXT, THANKS_TEXT};
use sentence_site::client::{Command, Controller, ElementId, Event, Phase};
use sentence_site::core::{is_end_word, SentenceClassifier, SentenceGenerator};
use sentence_site::models::{Feedback, Sentence};

fn fetched(ticket: u64, text: &str) -> Event {
    Event::SentenceFetched {
        ticket,
        result: Ok(Sentence::new(text)),
    }
}

/// Drive a fresh controller to the point where reactions are shown
fn awaiting(text: &str) -> Controller {
    let mut controller = Controller::new();
    controller.handle(Event::Generate);
    controller.handle(fetched(1, text));
    controller.handle(Event::RevealFinished { ticket: 1 });
    controller
}

#[test]
fn test_displayed_sentence_is_the_one_submitted() {
    let mut controller = awaiting("I put a tuple in firebase.");

    let view = controller.view();
    assert_eq!(view.sentence, "I put a tuple in firebase.");
    assert_eq!(view.feedback, PROMPT_TEXT);
    assert!(view.is_visible(ElementId::Yes) && view.is_visible(ElementId::No));

    let commands = controller.handle(Event::React { was_funny: true });
    assert_eq!(
        commands,
        vec![Command::SubmitFeedback {
            ticket: 1,
            feedback: Feedback::new(Sentence::new("I put a tuple in firebase."), true),
        }]
    );
}

#[test]
fn test_thanked_state_only_offers_generate_again() {
    let mut controller = awaiting("X");
    controller.handle(Event::React { was_funny: true });
    controller.handle(Event::FeedbackSubmitted { ticket: 1, result: Ok(()) });

    assert_eq!(controller.phase(), &Phase::Thanked { sentence: Sentence::new("X") });
    let view = controller.view();
    assert_eq!(view.feedback, THANKS_TEXT);
    assert_eq!(view.visible_controls(), vec![ElementId::GenSentenceAgain]);
}

#[test]
fn test_generate_again_is_reentrant() {
    let mut controller = awaiting("first.");
    controller.handle(Event::React { was_funny: false });
    controller.handle(Event::FeedbackSubmitted { ticket: 1, result: Ok(()) });

    let commands = controller.handle(Event::from_click(ElementId::GenSentenceAgain).unwrap());
    assert_eq!(commands, vec![Command::FetchSentence { ticket: 2 }]);

    let view = controller.view();
    assert!(view.sentence.is_empty(), "typed text is cleared");
    assert!(!view.feedback_container);
    assert!(view.visible_controls().is_empty());
    assert!(controller.sentence().is_none());
}

#[test]
fn test_overlapping_generates_latest_wins() {
    let mut controller = Controller::new();
    controller.handle(Event::Generate);
    controller.handle(Event::Generate);

    // The newer response arrives first, the older one later
    let commands = controller.handle(fetched(2, "newer"));
    assert_eq!(commands.len(), 1);
    assert!(controller.handle(fetched(1, "older")).is_empty());

    controller.handle(Event::RevealFinished { ticket: 1 });
    assert!(matches!(controller.phase(), Phase::Displaying { .. }));
    controller.handle(Event::RevealFinished { ticket: 2 });
    assert_eq!(controller.sentence(), Some(&Sentence::new("newer")));
}

#[test]
fn test_older_response_after_newer_request_is_dropped() {
    let mut controller = Controller::new();
    controller.handle(Event::Generate);
    controller.handle(Event::Generate);

    assert!(controller.handle(fetched(1, "older")).is_empty());
    assert_eq!(controller.phase(), &Phase::Requesting { ticket: 2 });
}

#[test]
fn test_stale_feedback_completion_is_ignored() {
    let mut controller = awaiting("X");
    controller.handle(Event::React { was_funny: true });
    controller.handle(Event::Generate);
    controller.handle(Event::FeedbackSubmitted { ticket: 1, result: Ok(()) });
    assert_eq!(controller.phase(), &Phase::Requesting { ticket: 2 });
}

#[test]
fn test_fetch_failure_shows_error() {
    let mut controller = Controller::new();
    controller.handle(Event::Generate);
    controller.handle(Event::SentenceFetched {
        ticket: 1,
        result: Err("There was an issue connecting to the server.".to_string()),
    });

    let view = controller.view();
    assert_eq!(view.feedback, "There was an issue connecting to the server.");
    assert!(view.is_visible(ElementId::Feedback));
    assert_eq!(view.visible_controls(), vec![ElementId::GenSentenceAgain]);
}

#[test]
fn test_banner_aspect_ratio_preserved_below_cutoff() {
    let naturals = [
        Dimensions { width: 1920.0, height: 1080.0 },
        Dimensions { width: 1280.0, height: 720.0 },
        Dimensions { width: 800.0, height: 1200.0 },
        Dimensions { width: 333.0, height: 777.0 },
    ];

    for natural in naturals {
        for width in (320..1000).step_by(37) {
            for height in [480.0, 667.0, 812.0, 1024.0] {
                let viewport = Viewport { width: width as f64, height };
                let layout = scale_banner(natural, viewport);
                let ratio = layout.width / layout.height;
                assert!(
                    (ratio - natural.aspect_ratio()).abs() < 1e-9,
                    "ratio {} drifted from {} at {:?}",
                    ratio,
                    natural.aspect_ratio(),
                    viewport
                );
                assert_eq!(layout.height, height + HEIGHT_SCALE);
                assert_eq!(layout.margin_top, 0.0);
            }
        }
    }
}

#[test]
fn test_banner_cutoff_boundary() {
    let natural = Dimensions { width: 1600.0, height: 900.0 };
    let below = scale_banner(natural, Viewport { width: WINDOW_CUTOFF - 1.0, height: 600.0 });
    let at = scale_banner(natural, Viewport { width: WINDOW_CUTOFF, height: 600.0 });

    assert_eq!(below.height, 605.0);
    assert_eq!(at.width, WINDOW_CUTOFF);
    assert!((at.width / at.height - natural.aspect_ratio()).abs() < 1e-9);
}

#[test]
fn test_hero_resize_recomputes_every_time() {
    let natural = Dimensions { width: 1920.0, height: 1080.0 };
    let hero = HeroLayout::capture(natural, natural, natural);

    let small = hero.on_resize(Viewport { width: 375.0, height: 667.0 });
    let large = hero.on_resize(Viewport { width: 1440.0, height: 900.0 });
    assert_ne!(small[0].1, large[0].1);
    assert_eq!(hero_height(Viewport { width: 375.0, height: 667.0 }), 672.0);
}

#[test]
fn test_generator_walks_to_end_words() {
    let mut generator = SentenceGenerator::default();
    generator.train_all([
        "I put a tuple in firebase.",
        "I rewrote the build in bash",
        "The tests pass on my machine!",
    ]);

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let sentence = generator.generate(None, &mut rng).unwrap();
        let last = sentence.rsplit(' ').next().unwrap();
        assert!(is_end_word(last), "'{}' does not end a sentence", sentence);
    }
}

#[test]
fn test_generator_respects_classifier() {
    let mut classifier = SentenceClassifier::new();
    classifier.train("tuple firebase", true);
    classifier.train("quarterly revenue meeting", false);

    let mut generator = SentenceGenerator::new(classifier);
    generator.train_all(["I put a tuple in firebase.", "We had a quarterly revenue meeting."]);

    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let sentence = generator.generate(None, &mut rng).unwrap();
        assert!(
            generator.classifier().classify(&sentence).unwrap(),
            "'{}' should have been rejected",
            sentence
        );
    }
}
