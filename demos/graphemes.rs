use groundwork::trie::PrefixSet;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our set, one grapheme cluster per node
    let mut set: PrefixSet<String, &str> = PrefixSet::new();

    // Add some graphemes
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    assert!(set.add(input.clone()));
    assert!(!set.add(input.clone()));
    assert!(set.contains(input.clone()));
    assert!(set.contains_prefix(input.clone().take(2)));

    // The key comes back whole
    assert_eq!(set.iter().collect::<Vec<String>>(), vec![s.to_string()]);
    assert!(set.remove(input.clone()));
    assert!(!set.contains(input));
}
