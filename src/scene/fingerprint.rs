use crate::{
    foundation::{error::PromoResult, math::Fnv1a64},
    scene::model::SceneTree,
};

/// Stable 64-bit digest of a frame's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint(pub u64);

/// Digest the serialized tree. Two trees fingerprint equal iff their JSON forms are equal.
pub fn fingerprint_tree(tree: &SceneTree) -> PromoResult<FrameFingerprint> {
    let bytes = serde_json::to_vec(tree)?;
    let mut h = Fnv1a64::new_default();
    h.write_u64(bytes.len() as u64);
    h.write_bytes(&bytes);
    Ok(FrameFingerprint(h.finish()))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
