use crate::infra::in_memory_survey_service;
use chrono::NaiveDate;
use clap::Args;
use pulsecheck::error::AppError;
use pulsecheck::surveys::{RatingDimension, SurveyAnalytics, SurveySubmission, TrackedFood};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the analytics payload as JSON instead of a text report.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = in_memory_survey_service();

    println!("PulseCheck survey demo");
    for submission in sample_submissions() {
        let name = submission.full_name.clone().unwrap_or_default();
        match service.submit(submission) {
            Ok(stored) => println!(
                "- stored {} ({} favourite foods) as {}",
                stored.personal.full_name,
                stored.favorite_foods.len(),
                stored.survey_id
            ),
            Err(err) => println!("- rejected submission from '{}': {}", name, err),
        }
    }

    let analytics = match service.analytics() {
        Ok(Some(analytics)) => analytics,
        Ok(None) => {
            println!("\nNo Surveys Available.");
            return Ok(());
        }
        Err(err) => {
            println!("\nAnalytics unavailable: {}", err);
            return Ok(());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analytics)?);
    } else {
        render_analytics(&analytics);
    }
    Ok(())
}

fn render_analytics(analytics: &SurveyAnalytics) {
    println!("\nSurvey results ({} responses)", analytics.total_surveys);
    println!(
        "Age: average {:.1} | youngest {} | oldest {}",
        analytics.average_age, analytics.youngest_age, analytics.oldest_age
    );
    println!("\nFood preferences");
    for food in TrackedFood::ordered() {
        println!(
            "- {}: {:.1}%",
            food.label(),
            analytics.food_percentage(food)
        );
    }
    println!("\nAverage ratings");
    for dimension in RatingDimension::ordered() {
        println!(
            "- {}: {:.1}",
            dimension.label(),
            analytics.average_rating(dimension)
        );
    }
}

fn respondent(
    name: &str,
    contact: &str,
    age: i32,
    born: (i32, u32, u32),
    foods: &[&str],
    ratings: [i32; 4],
) -> SurveySubmission {
    let [watch_movies, listen_to_radio, eat_out, watch_tv] = ratings;
    SurveySubmission {
        full_name: Some(name.to_string()),
        email: Some(format!(
            "{}@example.com",
            name.to_ascii_lowercase().replace(' ', ".")
        )),
        contact_number: Some(contact.to_string()),
        age: Some(age),
        date_of_birth: NaiveDate::from_ymd_opt(born.0, born.1, born.2),
        favorite_foods: foods.iter().map(|food| food.to_string()).collect(),
        rating_watch_movies: Some(watch_movies),
        rating_listen_to_radio: Some(listen_to_radio),
        rating_eat_out: Some(eat_out),
        rating_watch_tv: Some(watch_tv),
    }
}

fn sample_submissions() -> Vec<SurveySubmission> {
    vec![
        respondent(
            "Thandi Mokoena",
            "082 555 0101",
            34,
            (1991, 5, 2),
            &["Pizza", "Pap and Wors"],
            [4, 2, 5, 3],
        ),
        respondent(
            "Johan van Wyk",
            "083 555 0177",
            58,
            (1967, 11, 23),
            &["Pap and Wors"],
            [2, 5, 3, 4],
        ),
        respondent(
            "Zanele Nkosi",
            "071 555 0142",
            19,
            (2006, 2, 14),
            &["Pizza", "Pasta", "Pizza"],
            [5, 1, 4, 5],
        ),
        respondent("Kabelo Sithole", "", 41, (1984, 8, 30), &["Pasta"], [3, 3, 3, 3]),
        respondent("Ruth Daniels", "060 555 0190", 72, (1953, 4, 9), &[], [1, 4, 2, 4]),
    ]
}
