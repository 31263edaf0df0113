use groundwork::probing::ProbingSet;
use groundwork::trie::StringSet;
use rand::{distributions::Alphanumeric, thread_rng, Rng};

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our sets and a collection of searches
    let mut trie = StringSet::new();
    let mut table = ProbingSet::new(4).expect("16 slots");
    let mut searches = vec![];

    // Store 10 random strings composed of between 1 and 10
    // characters in our search collection and both sets.
    for _i in 0..POPULATION_SIZE {
        let entry: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(thread_rng().gen_range(1..=SIZE))
            .map(char::from)
            .collect();
        searches.push(entry.clone());
        trie.add(entry.chars());
        table.add(entry).expect("room for every entry");
    }

    // iterate over both sets and confirm that all keys are in our
    // search collection
    println!("prefix set");
    for key in trie.iter() {
        assert!(searches.contains(&key));
        println!("key: {}", key);
    }
    println!("probing set");
    for key in table.iter() {
        assert!(searches.contains(key));
        println!("key: {}", key);
    }

    // drop every key starting with a digit through the cursors
    let mut cursor = trie.cursor_mut();
    while let Some(key) = cursor.next() {
        if key.starts_with(|c: char| c.is_ascii_digit()) {
            cursor.remove().expect("after next()");
        }
    }
    let mut cursor = table.cursor_mut();
    while cursor.has_next() {
        let digit = cursor
            .try_next()
            .map(|key| key.starts_with(|c: char| c.is_ascii_digit()))
            .expect("has_next()");
        if digit {
            cursor.remove().expect("after next()");
        }
    }
    assert_eq!(trie.len(), table.len());
    println!("{} keys left", trie.len());
}
