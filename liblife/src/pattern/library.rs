//! Seed shapes used to populate a fresh board.

use super::Pattern;

const A: bool = true;
const D: bool = false;

#[rustfmt::skip]
pub static GLIDER: Pattern = Pattern::from_static("glider", 3, 3, &[
    D, A, D,
    D, D, A,
    A, A, A,
]);

#[rustfmt::skip]
pub static BLOCK: Pattern = Pattern::from_static("block", 2, 2, &[
    A, A,
    A, A,
]);

#[rustfmt::skip]
pub static LOAF: Pattern = Pattern::from_static("loaf", 4, 4, &[
    D, A, A, D,
    A, D, D, A,
    D, A, D, A,
    D, D, A, D,
]);

#[rustfmt::skip]
pub static TUB: Pattern = Pattern::from_static("tub", 3, 3, &[
    D, A, D,
    A, D, A,
    D, A, D,
]);

pub static BLINKER: Pattern = Pattern::from_static("blinker", 3, 1, &[A, A, A]);

#[rustfmt::skip]
pub static PULSAR: Pattern = Pattern::from_static("pulsar", 7, 7, &[
    D, D, A, A, A, D, D,
    D, D, D, D, D, D, D,
    A, D, D, D, D, D, A,
    A, D, D, D, D, D, A,
    A, D, D, D, D, D, A,
    D, D, D, D, D, D, D,
    D, D, A, A, A, D, D,
]);

pub fn all() -> [&'static Pattern; 6] {
    [&GLIDER, &BLOCK, &LOAF, &TUB, &BLINKER, &PULSAR]
}

/// Case-insensitive lookup in [`all`].
pub fn by_name(name: &str) -> Option<&'static Pattern> {
    all()
        .into_iter()
        .find(|pattern| pattern.name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        let dims: Vec<_> = all()
            .into_iter()
            .map(|pattern| (pattern.name(), pattern.width(), pattern.height()))
            .collect();

        assert_eq!(
            dims,
            vec![
                ("glider", 3, 3),
                ("block", 2, 2),
                ("loaf", 4, 4),
                ("tub", 3, 3),
                ("blinker", 3, 1),
                ("pulsar", 7, 7),
            ]
        );
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(by_name("Pulsar"), Some(&PULSAR));
        assert_eq!(by_name("BLOCK"), Some(&BLOCK));
        assert_eq!(by_name("gosper"), None);
    }
}
