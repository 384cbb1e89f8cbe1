//! One generation run: build every post, check that ids are unique, load the
//! template and render. Any failure ends the run at the step where it
//! happened.

use std::collections::HashSet;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use spdlog::{debug, info};

use crate::error::{Error, Result};
use crate::post::{IdPolicy, Post, PostBuilder};
use crate::post_check::check_duplicates;
use crate::template::Template;
use crate::view::escape::RenderMode;
use crate::view::page_renderer::PageRenderer;

/// Where rendered pages go.
pub enum Output<'a> {
    /// One page holding every post.
    Aggregate(&'a mut dyn Write),
    /// One `<id>.html` page per post inside the directory.
    PerPost(PathBuf),
}

pub struct GeneratorOptions {
    pub date_format: String,
    pub mode: RenderMode,
    pub id_policy: IdPolicy,
}

impl GeneratorOptions {
    /// Separate HTML pages; ids are only checked for uniqueness.
    pub fn pages(date_format: &str) -> GeneratorOptions {
        GeneratorOptions {
            date_format: date_format.to_string(),
            mode: RenderMode::Html,
            id_policy: IdPolicy::Any,
        }
    }

    /// A single escaped feed page with feed dates and lowercase ids.
    pub fn feed(date_format: &str) -> GeneratorOptions {
        GeneratorOptions {
            date_format: date_format.to_string(),
            mode: RenderMode::Feed,
            id_policy: IdPolicy::LowercaseOnly,
        }
    }
}

pub fn generate(options: &GeneratorOptions, template_dir: &Path, post_files: &[PathBuf], output: Output) -> Result<()> {
    let template = Template::load(template_dir)?;
    debug!("Loaded template from {}", template_dir.display());

    let posts = build_posts(options, post_files)?;
    check_duplicates(&posts)?;
    info!("Built {} posts", posts.len());

    let renderer = PageRenderer {
        template: &template,
        mode: options.mode,
    };
    match output {
        Output::Aggregate(sink) => renderer.render(&posts, sink),
        Output::PerPost(out_dir) => write_pages(&renderer, &posts, &out_dir),
    }
}

pub fn build_posts(options: &GeneratorOptions, post_files: &[PathBuf]) -> Result<Vec<Post>> {
    let builder = PostBuilder {
        date_format: &options.date_format,
        id_policy: options.id_policy,
        feed_dates: options.mode == RenderMode::Feed,
    };

    let mut posts = Vec::with_capacity(post_files.len());
    for file in post_files {
        let post = builder.build_file(file)?;
        debug!("Built post {}", post);
        posts.push(post);
    }
    Ok(posts)
}

fn write_pages(renderer: &PageRenderer, posts: &[Post], out_dir: &Path) -> Result<()> {
    // Refuse every unusable id before the first file is created. Ids that
    // differ only by case would share a file on case-insensitive filesystems.
    let mut names: HashSet<String> = HashSet::with_capacity(posts.len());
    for post in posts {
        if !names.insert(page_file_name(&post.id)?.to_lowercase()) {
            return Err(Error::DuplicateId(post.id.clone()));
        }
    }
    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;

    for post in posts {
        let path = out_dir.join(page_file_name(&post.id)?);
        let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
        let mut sink = BufWriter::new(file);
        renderer
            .render(std::slice::from_ref(post), &mut sink)
            .map_err(|e| match e {
                Error::Output(source) => Error::io(&path, source),
                e => e,
            })?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn page_file_name(id: &str) -> Result<String> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        return Err(Error::UnsafeId(id.to_string()));
    }
    Ok(format!("{}.html", id))
}
