use std::collections::HashMap;

use models::movie::Movie;

/// 启动时填充仓储的内存种子数据
pub fn movies() -> HashMap<i64, Movie> {
    let seed = [
        Movie {
            id: 1,
            title: "Casablanca".into(),
            year: 1942,
            rating: 8.5,
            cast: vec!["Humphrey Bogart".into(), "Ingrid Bergman".into()],
            genre: "Romance".into(),
            poster: "casablanca.jpg".into(),
        },
        Movie {
            id: 2,
            title: "Gone with the Wind".into(),
            year: 1939,
            rating: 8.0,
            cast: vec!["Clark Gable".into(), "Vivien Leigh".into()],
            genre: "Romance".into(),
            poster: "gone_with_the_wind.jpg".into(),
        },
        Movie {
            id: 3,
            title: "Citizen Kane".into(),
            year: 1941,
            rating: 8.5,
            cast: vec!["Orson Welles".into(), "Joseph Cotten".into()],
            genre: "Mystery".into(),
            poster: "citizen_kane.jpg".into(),
        },
        Movie {
            id: 4,
            title: "The Wizard of Oz".into(),
            year: 1939,
            rating: 8.0,
            cast: vec!["Judy Garland".into()],
            genre: "Fantasy".into(),
            poster: "the_wizard_of_oz.jpg".into(),
        },
        Movie {
            id: 5,
            title: "North by Northwest".into(),
            year: 1959,
            rating: 8.5,
            cast: vec!["Cary Grant".into(), "Eva Marie Saint".into()],
            genre: "Thriller".into(),
            poster: "north_by_northwest.jpg".into(),
        },
    ];

    seed.into_iter().map(|m| (m.id, m)).collect()
}
