use crate::model::Book;

const BOOKS: [(&str, &str); 2] = [
    ("The Awakening", "Kate Chopin"),
    ("City of Glass", "Paul Auster"),
];

/// The fixed book catalog, in declaration order
pub fn books() -> Vec<Book> {
    BOOKS
        .iter()
        .map(|(title, author)| Book {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
        })
        .collect()
}
