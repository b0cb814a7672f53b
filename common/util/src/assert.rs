/// Asserts that the content contains every needle, in the order given.
///
/// Each needle is searched for after the end of the previous match, so repeated needles
/// must appear repeatedly in the content.
#[macro_export]
macro_rules! assert_contains_inorder {
    ($content:expr, [$($needle:expr),+ $(,)?]) => {{
        let content = &$content;
        let mut remainder: &str = content.as_ref();
        $(
            match remainder.find($needle) {
                Some(index) => {
                    remainder = &remainder[index + $needle.len()..];
                }
                None => panic!(
                    "Content not found, or out of order. needle: {:?}, remainder: {:?}",
                    $needle, remainder
                ),
            }
        )+
    }};
}
