// Per-sample memory total

use crate::models::{MediaMemoryInfo, MemoryInfo};

/// Sum of every byte count in the breakdown. `media` is a nested breakdown and
/// contributes its three sizes rather than being treated as one field.
pub fn compute_memory(info: Option<&MemoryInfo>) -> u64 {
    let Some(info) = info else {
        return 0;
    };
    [
        info.dom_dom,
        info.dom_style,
        info.dom_other,
        info.gc_heap_usage,
        media_total(&info.media),
    ]
    .into_iter()
    .chain(info.other.values().copied())
    .fold(0u64, u64::saturating_add)
}

fn media_total(media: &MediaMemoryInfo) -> u64 {
    media
        .audio_size
        .saturating_add(media.video_size)
        .saturating_add(media.resources_size)
}
