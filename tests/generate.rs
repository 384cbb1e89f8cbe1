use std::fs;
use std::path::{Path, PathBuf};

use slogen::error::Error;
use slogen::generator::{generate, GeneratorOptions, Output};
use slogen::post_list::retrieve_files;
use tempfile::TempDir;

fn write_template(dir: &Path, header: &str, item: &str, footer: &str) -> PathBuf {
    let template_dir = dir.join("template");
    fs::create_dir_all(&template_dir).expect("template dir");
    fs::write(template_dir.join("header"), header).expect("header");
    fs::write(template_dir.join("item"), item).expect("item");
    fs::write(template_dir.join("footer"), footer).expect("footer");
    template_dir
}

fn write_post(dir: &Path, name: &str, id: &str, title: &str, date: &str) -> PathBuf {
    let path = dir.join(name);
    let text = format!("id: {}\ntitle: {}\ndate: {}\n\nBody of *{}*.\n", id, title, date, id);
    fs::write(&path, text).expect("post");
    path
}

fn run_feed(template_dir: &Path, posts: &[PathBuf]) -> Result<String, Error> {
    let mut out: Vec<u8> = Vec::new();
    let options = GeneratorOptions::feed("%Y-%m-%d");
    generate(&options, template_dir, posts, Output::Aggregate(&mut out))?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn feed_renders_posts_in_argument_order() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(
        temp.path(),
        "<rss><channel>\n",
        "<item><guid>${id}</guid><title>${title}</title><pubDate>${daterss}</pubDate><d>${datefmt}</d></item>\n",
        "</channel></rss>\n",
    );
    let posts = vec![
        write_post(temp.path(), "z.md", "second", "Second & last", "2022-05-02 08:00"),
        write_post(temp.path(), "a.md", "first", "It's \"first\"", "2022-05-01 14:30"),
    ];

    let page = run_feed(&template_dir, &posts).expect("feed");
    assert_eq!(
        page,
        "<rss><channel>\n\
         <item><guid>second</guid><title>Second &amp; last</title><pubDate>Mon, 02 May 2022 08:00:00 GMT</pubDate><d>2022-05-02</d></item>\n\
         <item><guid>first</guid><title>It&#39s &quot;first&quot;</title><pubDate>Sun, 01 May 2022 14:30:00 GMT</pubDate><d>2022-05-01</d></item>\n\
         </channel></rss>\n"
    );
}

#[test]
fn rendered_fields_parse_back() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(temp.path(), "", "${id}|${title}|${date}\n", "");
    let title = "The <Fox> & \"Hound\"";
    let posts = vec![write_post(temp.path(), "fox.md", "fox", title, "2022-05-01 14:30")];

    let page = run_feed(&template_dir, &posts).expect("feed");
    let fields: Vec<&str> = page.trim_end().split('|').collect();
    assert_eq!(fields, ["fox", "The &lt;Fox&gt; &amp; &quot;Hound&quot;", "2022-05-01"]);

    let out_dir = temp.path().join("out");
    let options = GeneratorOptions::pages("%Y-%m-%d");
    generate(&options, &template_dir, &posts, Output::PerPost(out_dir.clone())).expect("pages");
    let page = fs::read_to_string(out_dir.join("fox.html")).expect("page");
    let fields: Vec<&str> = page.trim_end().split('|').collect();
    assert_eq!(fields, ["fox", title, "2022-05-01"]);
}

#[test]
fn pages_writes_one_file_per_post() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(temp.path(), "<html>", "<h1>${title}</h1>${body}", "</html>");
    let posts_dir = temp.path().join("posts");
    fs::create_dir(&posts_dir).expect("posts dir");
    write_post(&posts_dir, "one.md", "Post-1", "One <b>", "2022-05-01 14:30");
    write_post(&posts_dir, "two.md", "post-2", "Two", "2022-05-02 14:30");

    let out_dir = temp.path().join("site").join("posts");
    let files = retrieve_files(&[posts_dir]).expect("post files");
    let options = GeneratorOptions::pages("%d.%m.%Y");
    generate(&options, &template_dir, &files, Output::PerPost(out_dir.clone())).expect("pages");

    let one = fs::read_to_string(out_dir.join("Post-1.html")).expect("Post-1.html");
    assert!(one.starts_with("<html><h1>One <b></h1><p>Body of <em>Post-1</em>.</p>"));
    assert!(one.ends_with("</html>"));
    let two = fs::read_to_string(out_dir.join("post-2.html")).expect("post-2.html");
    assert!(two.contains("<h1>Two</h1>"));
}

#[test]
fn duplicate_id_fails_the_run() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(temp.path(), "", "${id}\n", "");
    let posts = vec![
        write_post(temp.path(), "a.md", "same", "A", "2022-05-01 14:30"),
        write_post(temp.path(), "b.md", "other", "B", "2022-05-01 14:30"),
        write_post(temp.path(), "c.md", "same", "C", "2022-05-01 14:30"),
    ];

    match run_feed(&template_dir, &posts) {
        Err(Error::DuplicateId(id)) => assert_eq!(id, "same"),
        other => panic!("expected a duplicate id error, got {:?}", other),
    }

    let out_dir = temp.path().join("out");
    let options = GeneratorOptions::pages("%Y-%m-%d");
    let res = generate(&options, &template_dir, &posts, Output::PerPost(out_dir.clone()));
    assert!(matches!(res, Err(Error::DuplicateId(_))));
    assert!(!out_dir.exists());
}

#[test]
fn missing_date_names_the_post() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(temp.path(), "", "${id}\n", "");
    let path = temp.path().join("nodate.md");
    fs::write(&path, "id: nodate\ntitle: No date\n\ntext\n").expect("post");

    let err = run_feed(&template_dir, &[path.clone()]).expect_err("missing date");
    assert!(matches!(err.root(), Error::MissingMetadata("date")));
    assert!(err.to_string().contains("nodate.md"));
}

#[test]
fn feed_rejects_bad_ids_but_pages_accept_them() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(temp.path(), "", "${id}\n", "");
    let posts = vec![write_post(temp.path(), "a.md", "hello-2", "A", "2022-05-01 14:30")];

    let err = run_feed(&template_dir, &posts).expect_err("bad id");
    assert!(matches!(err.root(), Error::InvalidId(id) if id == "hello-2"));

    let options = GeneratorOptions::pages("%Y-%m-%d");
    let out_dir = temp.path().join("out");
    generate(&options, &template_dir, &posts, Output::PerPost(out_dir.clone())).expect("pages");
    assert_eq!(fs::read_to_string(out_dir.join("hello-2.html")).expect("page"), "hello-2\n");
}

#[test]
fn pages_reject_ids_that_are_not_file_names() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(temp.path(), "", "${id}\n", "");
    let posts = vec![
        write_post(temp.path(), "a.md", "fine", "A", "2022-05-01 14:30"),
        write_post(temp.path(), "b.md", "../escape", "B", "2022-05-01 14:30"),
    ];

    let out_dir = temp.path().join("out");
    let options = GeneratorOptions::pages("%Y-%m-%d");
    let res = generate(&options, &template_dir, &posts, Output::PerPost(out_dir.clone()));
    assert!(matches!(res, Err(Error::UnsafeId(_))));
    assert!(!out_dir.join("fine.html").exists());
}

#[test]
fn pages_reject_ids_differing_only_by_case() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(temp.path(), "", "${id}\n", "");
    let posts = vec![
        write_post(temp.path(), "a.md", "Hello", "A", "2022-05-01 14:30"),
        write_post(temp.path(), "b.md", "hello", "B", "2022-05-01 14:30"),
    ];

    let out_dir = temp.path().join("out");
    let options = GeneratorOptions::pages("%Y-%m-%d");
    match generate(&options, &template_dir, &posts, Output::PerPost(out_dir.clone())) {
        Err(Error::DuplicateId(id)) => assert_eq!(id, "hello"),
        other => panic!("expected a duplicate id error, got {:?}", other),
    }
    assert!(!out_dir.exists());
}

#[test]
fn unterminated_placeholder_fails_render() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(temp.path(), "<h>", "<t>${title", "</h>");
    let posts = vec![write_post(temp.path(), "a.md", "a", "A", "2022-05-01 14:30")];

    let mut out: Vec<u8> = Vec::new();
    let options = GeneratorOptions::feed("%Y-%m-%d");
    let err = generate(&options, &template_dir, &posts, Output::Aggregate(&mut out)).expect_err("render");
    assert!(matches!(err.root(), Error::MissingClosingBracket));
    assert_eq!(out, b"<h>");
}

#[test]
fn missing_template_fragment() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = temp.path().join("template");
    fs::create_dir(&template_dir).expect("template dir");
    fs::write(template_dir.join("header"), "").expect("header");
    let posts = vec![write_post(temp.path(), "a.md", "a", "A", "2022-05-01 14:30")];

    match run_feed(&template_dir, &posts) {
        Err(Error::Io { path, .. }) => assert_eq!(path, template_dir.join("item")),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn date_format_overflow_fails() {
    let temp = TempDir::new().expect("tempdir");
    let template_dir = write_template(temp.path(), "", "${date}", "");
    let posts = vec![write_post(temp.path(), "a.md", "a", "A", "2022-05-01 14:30")];

    let options = GeneratorOptions::feed(&"%Y-%m-%d ".repeat(7));
    let mut out: Vec<u8> = Vec::new();
    let err = generate(&options, &template_dir, &posts, Output::Aggregate(&mut out)).expect_err("overflow");
    assert!(matches!(err.root(), Error::DateFormat { .. }));
}
