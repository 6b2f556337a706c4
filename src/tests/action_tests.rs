//! Tests for reset, download, discard and keyboard shortcuts.

use studio_ui::{Key, KeyPress, Modifiers};

use super::{notice, Harness, FILE};
use crate::api::{ApiError, ServerReply};
use crate::config::StudioConfig;
use crate::keybindings::Shortcut;
use crate::message::{ActionMessage, ControlMessage, Effect};
use crate::model::Param;
use crate::notification::NotificationKind;

fn ok(message: &str) -> Result<ServerReply, ApiError> {
    Ok(ServerReply {
        success: "true".to_string(),
        message: message.to_string(),
    })
}

fn refused(message: &str) -> Result<ServerReply, ApiError> {
    Ok(ServerReply {
        success: "false".to_string(),
        message: message.to_string(),
    })
}

fn ctrl(c: char) -> KeyPress {
    KeyPress::new(
        Key::Char(c),
        Modifiers {
            ctrl: true,
            ..Default::default()
        },
    )
}

fn no_image() -> Effect {
    notice(NotificationKind::Error, "Please upload an image first.", 3000)
}

#[test]
fn test_actions_need_an_image() {
    for action in [
        ActionMessage::Reset,
        ActionMessage::Download,
        ActionMessage::Discard,
    ] {
        let mut harness = Harness::new();
        harness.send(action);
        assert_eq!(harness.take(), vec![no_image()]);
    }
}

#[test]
fn test_reset_restores_defaults_and_cancels_pending_apply() {
    let mut harness = Harness::uploaded();
    harness.send(ControlMessage::Toggled {
        filter: "blur".to_string(),
        enabled: true,
    });
    harness.send(ControlMessage::SliderInput {
        filter: "blur".to_string(),
        param: Param::Value,
        raw: "13".to_string(),
    });
    harness.take();

    harness.send(ActionMessage::Reset);
    harness.advance(1000);

    let blur = harness.app.board().entry("blur").unwrap();
    assert!(!blur.enabled);
    assert_eq!(blur.value.get(Param::Value), Some(5.0));

    let effects = harness.take();
    assert_eq!(effects[..2], [Effect::CancelApply, Effect::CancelRestage(None)]);
    assert!(!effects.iter().any(|e| matches!(e, Effect::SendFilters { .. })));

    let delays: Vec<u32> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::Restage { delay_ms, .. } => Some(*delay_ms),
            _ => None,
        })
        .collect();
    assert_eq!(delays, (0..10).map(|i| i * 50).collect::<Vec<_>>());

    assert_eq!(
        &effects[effects.len() - 2..],
        [
            Effect::SetLoading(true),
            Effect::SendReset {
                url: "/filter/reset".to_string(),
                file_name: FILE.to_string(),
            },
        ]
    );
}

#[test]
fn test_change_during_reset_survives_restage() {
    let mut harness = Harness::uploaded();
    harness.send(ActionMessage::Reset);
    harness.advance(100);
    assert_eq!(*harness.restaged.borrow(), ["grayscale", "blur", "edges"]);

    harness.send(ControlMessage::Toggled {
        filter: "sepia".to_string(),
        enabled: true,
    });
    harness.send(ControlMessage::SliderInput {
        filter: "noise".to_string(),
        param: Param::Value,
        raw: "40".to_string(),
    });
    harness.advance(1000);

    let restaged = harness.restaged.borrow();
    assert_eq!(restaged.len(), 8);
    assert!(!restaged.iter().any(|f| f == "sepia" || f == "noise"));
    assert!(harness.app.board().entry("sepia").unwrap().enabled);
}

#[test]
fn test_second_reset_replaces_pending_restages() {
    let mut harness = Harness::uploaded();
    harness.send(ActionMessage::Reset);
    harness.advance(120);
    harness.send(ActionMessage::Reset);
    harness.advance(1000);

    let restaged = harness.restaged.borrow();
    assert_eq!(restaged.len(), 3 + 10);
    assert_eq!(restaged[3..].first().map(String::as_str), Some("grayscale"));
    assert_eq!(restaged.iter().filter(|f| *f == "invert").count(), 1);
}

#[test]
fn test_restage_carries_default_readouts() {
    let mut harness = Harness::uploaded();
    harness.send(ActionMessage::Reset);

    let restaged = harness.effects.iter().find_map(|e| match e {
        Effect::Restage {
            filter, readouts, ..
        } if filter == "brightness" => Some(readouts.clone()),
        _ => None,
    });
    let readouts = restaged.unwrap();
    assert_eq!(readouts.len(), 2);
    assert_eq!(readouts[0].param, Param::Alpha);
    assert_eq!(readouts[0].input, "1");
    assert_eq!(readouts[1].param, Param::Beta);
    assert_eq!(readouts[1].text, "0");
    assert_eq!(readouts[1].percent, 50.0);
}

#[test]
fn test_reset_finished() {
    let mut harness = Harness::uploaded();
    harness.send(ActionMessage::ResetFinished(ok("Filters reset.")));
    let effects = harness.take();
    assert_eq!(effects[0], Effect::SetLoading(false));
    assert!(matches!(&effects[1], Effect::ShowResult { url } if url.contains(FILE)));
    assert_eq!(
        effects[2],
        notice(NotificationKind::Success, "Filters reset.", 3000)
    );

    harness.send(ActionMessage::ResetFinished(refused("No such image")));
    assert_eq!(
        harness.take(),
        vec![
            Effect::SetLoading(false),
            notice(NotificationKind::Error, "No such image", 3000),
        ]
    );

    harness.send(ActionMessage::ResetFinished(Err(ApiError::network("offline"))));
    assert_eq!(
        harness.take()[1],
        notice(
            NotificationKind::Error,
            "An error occurred while processing: Network error: offline",
            3000,
        )
    );
}

#[test]
fn test_download() {
    let mut harness = Harness::uploaded();
    harness.send(ActionMessage::Download);
    assert_eq!(
        harness.take(),
        vec![
            notice(NotificationKind::Info, "Downloading image...", 3000),
            Effect::Navigate {
                url: format!("/download/{FILE}"),
            },
            notice(NotificationKind::Success, "Download started.", 3000),
        ]
    );
}

#[test]
fn test_shortcuts() {
    let mut harness = Harness::uploaded();
    let save = ctrl('s');
    assert!(harness.app.handles_key(&save));

    harness.send(ActionMessage::Key(save));
    assert!(harness.take().contains(&Effect::Navigate {
        url: format!("/download/{FILE}"),
    }));

    let cmd_r = KeyPress::new(
        Key::Char('r'),
        Modifiers {
            meta: true,
            ..Default::default()
        },
    );
    harness.send(ActionMessage::Key(cmd_r));
    assert!(harness
        .take()
        .iter()
        .any(|e| matches!(e, Effect::SendReset { .. })));

    let plain = KeyPress::new(Key::Char('s'), Modifiers::default());
    assert!(!harness.app.handles_key(&plain));
    harness.send(ActionMessage::Key(plain));
    assert!(harness.take().is_empty());
}

#[test]
fn test_rebound_shortcut() {
    let mut config = StudioConfig::default();
    config.keybindings.download = Shortcut::command(Key::Char('d'));

    let mut harness = Harness::with_config(&config);
    harness.upload(FILE);
    harness.take();

    assert!(!harness.app.handles_key(&ctrl('s')));
    harness.send(ActionMessage::Key(ctrl('d')));
    assert!(harness
        .take()
        .iter()
        .any(|e| matches!(e, Effect::Navigate { .. })));
}

#[test]
fn test_discard_clears_session() {
    let mut harness = Harness::uploaded();
    harness.send(ActionMessage::Discard);
    assert_eq!(
        harness.take(),
        vec![Effect::SendDiscard {
            url: format!("/image/{FILE}"),
        }]
    );
    assert!(harness.app.session().is_active());

    harness.send(ActionMessage::Discarded(ok("")));
    assert!(!harness.app.session().is_active());
    assert_eq!(
        harness.take(),
        vec![
            Effect::CancelApply,
            Effect::ClearOriginal,
            Effect::ClearResult,
            Effect::SetControlsEnabled(false),
            notice(NotificationKind::Success, "Image discarded.", 3000),
        ]
    );

    harness.send(ActionMessage::Download);
    assert_eq!(harness.take(), vec![no_image()]);
}

#[test]
fn test_discard_failure_keeps_session() {
    let mut harness = Harness::uploaded();
    harness.send(ActionMessage::Discarded(refused("Image is locked")));
    assert!(harness.app.session().is_active());
    assert_eq!(
        harness.take(),
        vec![notice(NotificationKind::Error, "Image is locked", 3000)]
    );

    harness.send(ActionMessage::Discarded(Err(ApiError::Status { status: 404 })));
    assert_eq!(
        harness.notifications()[0].message,
        "Failed to discard image: Server responded with status 404"
    );
}
