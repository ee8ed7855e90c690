//! Provides the gallery generation functionality.

use crate::error::SliderError;

use photo_slider_core::layout::{CONFIG_FILE, IMAGE_FOLDER, OUTPUT_FILE};
use photo_slider_core::{ensure_folder, Config, FolderStatus, Gallery};

use clap::ArgMatches;

use std::path::PathBuf;
use std::time::Instant;

/// Contains information about a successful generation.
pub struct GenerateInfo {
    /// The number of images in the gallery.
    pub image_count: usize,
}

/// The outcome of a run.
pub enum Outcome {
    /// The image folder did not exist and was created, so nothing was generated.
    FolderCreated,
    /// The gallery page was written.
    Generated(GenerateInfo),
}

/// The context of a run.
pub struct SliderContext {
    /// The gallery builder.
    pub gallery: Gallery,
    /// The project directory.
    pub project_dir: PathBuf,
}

impl SliderContext {
    /// Initialises the context, loading the configuration and creating it if it does not exist.
    pub fn init(dir: &str, seed: Option<u64>) -> Result<Self, Box<dyn SliderError>> {
        let project_dir = PathBuf::from(dir);
        let config_path = project_dir.join(CONFIG_FILE);
        let existed = config_path.exists();

        let config = Config::load(&config_path)?;

        if existed {
            verbose!("Loaded", "configuration from `{}`", config_path.display());
        } else {
            log!("Created", "default configuration `{}`", config_path.display());
        }

        let mut gallery = Gallery::new(&project_dir).with_config(config);

        if let Some(seed) = seed {
            gallery = gallery.with_seed(seed);
        }

        Ok(Self {
            gallery,
            project_dir,
        })
    }

    /// Generates the gallery page, unless the image folder had to be created first.
    pub fn generate(&mut self) -> Result<Outcome, Box<dyn SliderError>> {
        let start = Instant::now();
        let folder = self.gallery.image_folder();

        if ensure_folder(&folder)? == FolderStatus::Created {
            log!("Created", "image folder `{}`", folder.display());
            return Ok(Outcome::FolderCreated);
        }

        log!("Scanning", "{}", folder.display());

        let images = self.gallery.build()?;

        for image in images {
            verbose!("Found", "{}", image.rel_path);
        }

        let image_count = images.len();
        let output = self.project_dir.join(OUTPUT_FILE);
        self.gallery.save(&output)?;

        let duration = (start.elapsed().as_micros() / 100) as f64 / 10.0;

        log!(
            "Finished",
            "`{}` with {} images in {}ms",
            output.display(),
            image_count,
            duration
        );

        Ok(Outcome::Generated(GenerateInfo { image_count }))
    }
}

/// Runs the whole pipeline with the given arguments, printing instructions for the user.
pub fn generate(args: &ArgMatches) -> Result<Outcome, Box<dyn SliderError>> {
    let dir = args.value_of("dir").unwrap_or(".");
    let seed = args
        .value_of("seed")
        .map(|seed| {
            seed.parse::<u64>()
                .map_err(|_| format!("invalid seed `{}`: expected a non-negative integer", seed))
        })
        .transpose()?;

    let mut context = SliderContext::init(dir, seed)?;
    let outcome = context.generate()?;

    match &outcome {
        Outcome::FolderCreated => {
            println!("Creating {} folder...", IMAGE_FOLDER);
            println!(
                "Please place your images in the {} folder and run this program again.",
                IMAGE_FOLDER
            );
        }
        Outcome::Generated(info) => {
            println!();
            println!(
                "Generated {} with {} images from {} folder.",
                OUTPUT_FILE, info.image_count, IMAGE_FOLDER
            );
            println!();
            println!("Instructions:");
            println!("1. Place your images in the \"{}\" folder", IMAGE_FOLDER);
            println!(
                "2. Run this program to generate the HTML (edit {} to hide author)",
                CONFIG_FILE
            );
            println!(
                "3. Add {} as web source in OBS to view the photo slider",
                OUTPUT_FILE
            );
            println!();
        }
    }

    Ok(outcome)
}
