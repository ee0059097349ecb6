use nilsimsa_search::DuplicateSearcher;

fn main() {
    let documents = vec![
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "A short test message",
        "A short test message!",
    ];

    // Builds the database of 256-bit digests converted from input documents.
    let searcher = DuplicateSearcher::new()
        .build_digests_in_parallel(documents.iter().map(|doc| doc.as_bytes()))
        .unwrap();

    // Searches all pairs differing in at most 50 bits.
    let results = searcher.search_similar_pairs(50).unwrap();
    assert_eq!(results, vec![(0, 1, 43), (2, 3, 3)]);
}
