use playorder_core::{Collection, Song, Traversal};

/// The four songs used throughout the traversal tests, in insertion order.
pub fn example_playlist() -> Collection<Song> {
	[
		Song::new("Bohemian", "a", 354, 1000),
		Song::new("Stairway", "b", 482, 800),
		Song::new("Imagined", "c", 183, 1200),
		Song::new("Hey Jude", "d", 431, 900),
	]
	.into_iter()
	.collect()
}

/// A larger playlist with repeated keys, generated deterministically.
pub fn generated_playlist(count: usize) -> Collection<Song> {
	(0..count)
		.map(|i| {
			let title = format!("Song {:02}", (i * 7) % 13);
			Song::new(&title, "various", ((i * 31) % 17) as i64, ((i * 11) % 5) as i64)
		})
		.collect()
}

/// Runs the canonical reset / has_more / current / advance loop and clones what it reads.
pub fn drain(traversal: &mut Traversal<Song>) -> Vec<Song> {
	let mut songs = Vec::new();
	traversal.reset();
	while traversal.has_more() {
		songs.push(traversal.current().unwrap().clone());
		traversal.advance();
	}
	songs
}
