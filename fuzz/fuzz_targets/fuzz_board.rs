#![no_main]

use arbitrary::Arbitrary;
use dragway_core::{DragEvent, Modality};
use dragway_extras::Board;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzEvent {
    Start(bool, u8, usize),
    Enter(bool, u8, usize),
    Move(bool),
    Drop(bool, u8, usize),
    End(bool),
    Cancel,
}

fn modality(touch: bool) -> Modality {
    if touch { Modality::Touch } else { Modality::Pointer }
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    lists: Vec<(u8, Vec<u16>)>,
    grants: Vec<(u8, u8)>,
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: FuzzInput| {
    let mut board: Board<u8, u16> = Board::new();
    for (id, items) in input.lists {
        board.insert_list(id, items);
    }
    for (destination, source) in &input.grants {
        board.allow(*destination, *source);
    }

    let mut before: Vec<u16> = board
        .iter()
        .flat_map(|(_, items)| items.iter().copied())
        .collect();
    before.sort_unstable();
    let list_count = board.len();

    for event in &input.events {
        let event: DragEvent<u8> = match *event {
            FuzzEvent::Start(touch, source, index) => DragEvent::Start {
                modality: modality(touch),
                source,
                index,
            },
            FuzzEvent::Enter(touch, target, index) => DragEvent::Enter {
                modality: modality(touch),
                target,
                index,
            },
            FuzzEvent::Move(touch) => DragEvent::Move {
                modality: modality(touch),
            },
            FuzzEvent::Drop(touch, target, index) => DragEvent::Drop {
                modality: modality(touch),
                target,
                index,
            },
            FuzzEvent::End(touch) => DragEvent::End {
                modality: modality(touch),
            },
            FuzzEvent::Cancel => DragEvent::Cancel,
        };
        board.handle(&event);
    }

    // Drag handling moves items around; it never creates or destroys them,
    // and it never adds or removes lists.
    let mut after: Vec<u16> = board
        .iter()
        .flat_map(|(_, items)| items.iter().copied())
        .collect();
    after.sort_unstable();
    assert_eq!(after, before, "items not conserved");
    assert_eq!(board.len(), list_count, "list count changed");
});
