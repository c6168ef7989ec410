use rand::Rng;

/// Shuffle each contiguous run of `group_size` items independently.
///
/// The sequence is split into runs in its current order; the last run may be shorter and is
/// shuffled as well. Without a group size the whole sequence is one run. Items never leave
/// their run, so a coarse ordering (e.g. weakest words first) survives the shuffle.
pub fn group_shuffle<T, R>(mut items: Vec<T>, group_size: Option<usize>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    if items.len() < 2 {
        return items;
    }

    let group_size = group_size.unwrap_or(items.len()).max(1);
    for group in items.chunks_mut(group_size) {
        fisher_yates(group, rng);
    }

    items
}

fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
