use crate::{
    composition::model::{Act, Composition},
    foundation::core::FrameIndex,
};

/// Where a mounted act is in its lifetime at some frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActPhase {
    /// Fading in under the previous act's crossfade.
    Entering,
    /// Inside its nominal window with no handoff in progress.
    Holding,
    /// Past its nominal end, mounted only for its outgoing crossfade.
    Leaving,
}

/// An act mounted at a given global frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ActiveAct {
    /// Index into [`Composition::acts`].
    pub index: usize,
    /// `global - start`.
    pub local_frame: FrameIndex,
    /// Crossfade opacity in `[0, 1]`; `1.0` outside any handoff.
    pub opacity: f64,
    pub phase: ActPhase,
}

/// Acts mounted at `frame`, in paint order (bottom first).
///
/// Acts are painted in timeline order unless a handoff asks for the outgoing act on top. Frames
/// outside the timeline mount nothing.
pub fn active_acts(comp: &Composition, frame: FrameIndex) -> Vec<ActiveAct> {
    let mut out = Vec::with_capacity(2);
    for (index, act) in comp.acts.iter().enumerate() {
        if !act.mounted_range().contains(frame) {
            continue;
        }
        let prev = index.checked_sub(1).and_then(|i| comp.acts.get(i));
        let (phase, opacity) = resolve(prev, act, frame);
        let active = ActiveAct {
            index,
            local_frame: FrameIndex(frame.0 - act.window.start.0),
            opacity,
            phase,
        };
        tracing::debug!(
            act = %act.name,
            frame = frame.0,
            local = active.local_frame.0,
            opacity,
            ?phase,
            "act mounted"
        );
        out.push(active);
    }

    // A leaving act painted above replaces the timeline order for that pair.
    if let [first, second] = out.as_mut_slice()
        && first.phase == ActPhase::Leaving
        && comp.acts[first.index]
            .transition_out
            .as_ref()
            .is_some_and(|t| t.outgoing_above)
    {
        std::mem::swap(first, second);
    }
    out
}

fn resolve(prev: Option<&Act>, act: &Act, frame: FrameIndex) -> (ActPhase, f64) {
    let end = act.window.end();
    if frame.0 >= end.0 {
        let opacity = act
            .transition_out
            .as_ref()
            .map_or(0.0, |t| t.outgoing_opacity(frame.0 - end.0));
        return (ActPhase::Leaving, opacity);
    }

    let elapsed = frame.0 - act.window.start.0;
    match prev.and_then(|p| p.transition_out.as_ref()) {
        Some(fade) if elapsed < fade.frames => (ActPhase::Entering, fade.incoming_opacity(elapsed)),
        _ => (ActPhase::Holding, 1.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/sequencer.rs"]
mod tests;
