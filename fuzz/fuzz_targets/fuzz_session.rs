#![no_main]

use arbitrary::Arbitrary;
use dragway_core::{AcceptPolicy, DragConfig, DragEvent, DragSession, Modality, RestartPolicy};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum FuzzModality {
    Pointer,
    Touch,
}

impl From<FuzzModality> for Modality {
    fn from(modality: FuzzModality) -> Self {
        match modality {
            FuzzModality::Pointer => Modality::Pointer,
            FuzzModality::Touch => Modality::Touch,
        }
    }
}

#[derive(Debug, Arbitrary)]
enum FuzzEvent {
    Start(FuzzModality, u8, usize),
    Enter(FuzzModality, u8, usize),
    Leave(FuzzModality),
    Move(FuzzModality),
    Drop(FuzzModality, u8, usize),
    End(FuzzModality),
    Hover(FuzzModality),
    Cancel,
    Passthrough(u32),
}

impl From<&FuzzEvent> for DragEvent<u8, u32> {
    fn from(event: &FuzzEvent) -> Self {
        match *event {
            FuzzEvent::Start(m, source, index) => DragEvent::Start {
                modality: m.into(),
                source,
                index,
            },
            FuzzEvent::Enter(m, target, index) => DragEvent::Enter {
                modality: m.into(),
                target,
                index,
            },
            FuzzEvent::Leave(m) => DragEvent::Leave { modality: m.into() },
            FuzzEvent::Move(m) => DragEvent::Move { modality: m.into() },
            FuzzEvent::Drop(m, target, index) => DragEvent::Drop {
                modality: m.into(),
                target,
                index,
            },
            FuzzEvent::End(m) => DragEvent::End { modality: m.into() },
            FuzzEvent::Hover(m) => DragEvent::Hover { modality: m.into() },
            FuzzEvent::Cancel => DragEvent::Cancel,
            FuzzEvent::Passthrough(payload) => DragEvent::Passthrough(payload),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    guarded_restart: bool,
    grants: Vec<(u8, u8)>,
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: FuzzInput| {
    let mut policy = AcceptPolicy::new();
    for (destination, source) in &input.grants {
        policy.allow(*destination, *source);
    }
    let config = DragConfig {
        restart: if input.guarded_restart {
            RestartPolicy::IgnoreWhileActive
        } else {
            RestartPolicy::Overwrite
        },
    };

    let mut session: DragSession<u8> = DragSession::new();
    for event in &input.events {
        let event: DragEvent<u8, u32> = event.into();
        let was_modality = session.modality();
        let decision = session.apply(&event, &policy, &config);

        // Post-conditions that must always hold:
        if decision.is_some() {
            assert!(
                matches!(event, DragEvent::Drop { .. } | DragEvent::End { .. }),
                "decision from a non-terminal event"
            );
            assert!(session.is_idle(), "decision without returning to idle");
        }
        match &event {
            DragEvent::Cancel => assert!(session.is_idle(), "cancel left session active"),
            DragEvent::Drop { modality, .. } | DragEvent::End { modality }
                if was_modality == Some(*modality) =>
            {
                assert!(session.is_idle(), "matched terminal left session active");
            }
            _ => {}
        }
        if let Some(target) = session.recorded_target() {
            let (source, _) = session.source().expect("target recorded while idle");
            assert!(
                policy.accepts(&target.container, source),
                "recorded target not policy-approved"
            );
        }
    }
});
