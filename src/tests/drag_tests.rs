//! Tests for drag-and-drop reordering.

use studio_ui::{ItemBounds, ScrollDirection, ScrollViewport};

use super::{notice, Harness, FILE};
use crate::api::{ApiError, OrderUpdate, ServerReply};
use crate::message::{DragMessage, Effect};
use crate::model::catalog;
use crate::notification::NotificationKind;

const ROW: f64 = 40.0;

/// Tall enough that no pointer position triggers edge scrolling.
const ROOMY: ScrollViewport = ScrollViewport {
    top: -1000.0,
    bottom: 2000.0,
};

/// Items stacked in the board's current order, `ROW` pixels each.
fn column(harness: &Harness) -> Vec<(String, ItemBounds)> {
    harness
        .app
        .board()
        .order()
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name, ItemBounds::new(i as f64 * ROW, ROW)))
        .collect()
}

fn drag_over(harness: &mut Harness, pointer_y: f64, viewport: ScrollViewport) {
    let items = column(harness);
    harness.send(DragMessage::Over {
        pointer_y,
        items,
        viewport,
    });
}

fn drop_here(harness: &mut Harness) {
    let order = harness.app.board().order();
    harness.send(DragMessage::Ended { order });
}

#[test]
fn test_drag_to_top() {
    let mut harness = Harness::uploaded();
    harness.send(DragMessage::Started("blur".to_string()));
    assert!(harness.app.is_dragging());
    assert_eq!(
        harness.take(),
        vec![
            Effect::MarkDragging {
                filter: "blur".to_string(),
                dragging: true,
            },
            notice(NotificationKind::Info, "Reordering filters...", 1000),
        ]
    );

    drag_over(&mut harness, 5.0, ROOMY);
    assert_eq!(
        harness.take(),
        vec![
            Effect::MoveItem {
                filter: "blur".to_string(),
                before: Some("grayscale".to_string()),
            },
            Effect::AutoScroll(None),
        ]
    );

    drop_here(&mut harness);
    assert!(!harness.app.is_dragging());

    let effects = harness.take();
    let Some(Effect::SendOrder { url, body }) =
        effects.iter().find(|e| matches!(e, Effect::SendOrder { .. }))
    else {
        panic!("no order request in {effects:?}");
    };
    assert_eq!(url, &format!("/filter/order?fileName={FILE}"));
    assert_eq!(body.order[0], "blur");
    assert_eq!(body.order[1], "grayscale");

    let mut sent = body.order.clone();
    let mut expected: Vec<String> = catalog::all().iter().map(|d| d.name.to_string()).collect();
    sent.sort();
    expected.sort();
    assert_eq!(sent, expected);

    assert_eq!(
        effects.last(),
        Some(&notice(NotificationKind::Success, "Filter order updated", 2000))
    );
}

#[test]
fn test_hovering_same_slot_does_not_move() {
    let mut harness = Harness::uploaded();
    harness.send(DragMessage::Started("edges".to_string()));
    harness.take();

    // Just above the midpoint of the item after `edges` keeps it in place.
    drag_over(&mut harness, 3.0 * ROW + 10.0, ROOMY);
    assert_eq!(harness.take(), vec![Effect::AutoScroll(None)]);
}

#[test]
fn test_drag_past_last_item_appends() {
    let mut harness = Harness::uploaded();
    harness.send(DragMessage::Started("grayscale".to_string()));
    harness.take();

    drag_over(&mut harness, 20.0 * ROW, ROOMY);
    assert!(harness.take().contains(&Effect::MoveItem {
        filter: "grayscale".to_string(),
        before: None,
    }));
    assert_eq!(
        harness.app.board().order().last().map(String::as_str),
        Some("grayscale")
    );
}

#[test]
fn test_edge_auto_scroll() {
    let mut harness = Harness::uploaded();
    harness.send(DragMessage::Started("noise".to_string()));
    let viewport = ScrollViewport {
        top: 0.0,
        bottom: 200.0,
    };

    drag_over(&mut harness, 190.0, viewport);
    assert_eq!(
        harness.take().last(),
        Some(&Effect::AutoScroll(Some(ScrollDirection::Down)))
    );

    drag_over(&mut harness, 10.0, viewport);
    assert_eq!(
        harness.take().last(),
        Some(&Effect::AutoScroll(Some(ScrollDirection::Up)))
    );

    drag_over(&mut harness, 100.0, viewport);
    assert_eq!(harness.take().last(), Some(&Effect::AutoScroll(None)));

    drag_over(&mut harness, 195.0, viewport);
    drop_here(&mut harness);
    assert!(harness.take().contains(&Effect::AutoScroll(None)));
}

#[test]
fn test_invalid_page_order_keeps_board() {
    let mut harness = Harness::uploaded();
    harness.send(DragMessage::Started("blur".to_string()));
    drag_over(&mut harness, 5.0, ROOMY);
    let before = harness.app.board().order();

    harness.send(DragMessage::Ended {
        order: vec!["blur".to_string(), "blur".to_string()],
    });

    assert_eq!(harness.app.board().order(), before);
    assert!(harness.effects.iter().any(|e| matches!(
        e,
        Effect::SendOrder { body, .. } if *body == OrderUpdate { order: before.clone() }
    )));
}

#[test]
fn test_page_order_is_adopted() {
    let mut harness = Harness::uploaded();
    harness.send(DragMessage::Started("invert".to_string()));
    let mut order = harness.app.board().order();
    order.rotate_right(1);

    harness.send(DragMessage::Ended {
        order: order.clone(),
    });
    assert_eq!(harness.app.board().order(), order);
}

#[test]
fn test_reorder_without_image_stays_local() {
    let mut harness = Harness::new();
    harness.send(DragMessage::Started("sepia".to_string()));
    drag_over(&mut harness, 5.0, ROOMY);
    drop_here(&mut harness);

    assert!(harness.requests().is_empty());
    assert_eq!(harness.app.board().order()[0], "sepia");
}

#[test]
fn test_events_outside_drag_ignored() {
    let mut harness = Harness::uploaded();
    drag_over(&mut harness, 5.0, ROOMY);
    drop_here(&mut harness);
    harness.send(DragMessage::Started("vignette".to_string()));

    assert!(harness.take().is_empty());
    assert!(!harness.app.is_dragging());
}

#[test]
fn test_order_saved_refreshes_result() {
    let mut harness = Harness::uploaded();
    harness.send(DragMessage::OrderSaved(Ok(ServerReply {
        success: "true".to_string(),
        message: String::new(),
    })));
    assert!(matches!(
        harness.take().as_slice(),
        [Effect::ShowResult { url }] if url.starts_with(&format!("/image/{FILE}?t="))
    ));
}

#[test]
fn test_order_save_failure_is_silent() {
    let mut harness = Harness::uploaded();
    harness.send(DragMessage::OrderSaved(Ok(ServerReply {
        success: "false".to_string(),
        message: "nope".to_string(),
    })));
    harness.send(DragMessage::OrderSaved(Err(ApiError::network("offline"))));
    assert!(harness.take().is_empty());
}
