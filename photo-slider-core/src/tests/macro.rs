macro_rules! define_captions {
    ($($name:ident: $input:expr => ($author:expr, $title:expr)),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let (author, title) = $crate::parse_author_title($input);
                assert_eq!(author, $author, "author of {:?}", $input);
                assert_eq!(title, $title, "title of {:?}", $input);
            }
        )*
    };
}
