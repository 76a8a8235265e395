use maud::{DOCTYPE, Markup, html};

use crate::models::{DecoratedMovie, MOODS, MovieFilters, MoviePage, SortBy};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Extra dataset columns shown on the detail page, in display order.
const DETAIL_FIELDS: [(&str, &str); 5] = [
    ("release_date", "Released"),
    ("runtime", "Runtime"),
    ("vote_average", "Rating"),
    ("vote_count", "Votes"),
    ("status", "Status"),
];

pub fn index_page(listing: &MoviePage<'_>, filters: &MovieFilters) -> String {
    let genre = filters.genre().unwrap_or("");
    let language = filters.language().unwrap_or("");
    let search = filters.search().unwrap_or("");

    page(
        "Movies",
        html! {
            (nav())
            div class="max-w-6xl mx-auto px-6 py-10" {
                form class="bg-white shadow rounded-lg p-6 flex flex-wrap items-end gap-4" method="get" action="/" {
                    div {
                        label class="block text-sm font-medium text-gray-700" for="search" { "Search" }
                        input class="mt-2 rounded-md border border-gray-300 px-3 py-2" type="search" name="search" id="search" value=(search) placeholder="Title, overview, director";
                    }
                    div {
                        label class="block text-sm font-medium text-gray-700" for="genre" { "Genre" }
                        input class="mt-2 rounded-md border border-gray-300 px-3 py-2" name="genre" id="genre" value=(genre) placeholder="Comedy";
                    }
                    div {
                        label class="block text-sm font-medium text-gray-700" for="language" { "Language" }
                        input class="mt-2 w-28 rounded-md border border-gray-300 px-3 py-2" name="language" id="language" value=(language) placeholder="en";
                    }
                    div {
                        label class="block text-sm font-medium text-gray-700" for="mood" { "Mood" }
                        select class="mt-2 rounded-md border border-gray-300 px-3 py-2" name="mood" id="mood" {
                            option value="" selected[filters.mood().is_none()] { "Any" }
                            @for (mood, _) in MOODS {
                                option value=(mood) selected[filters.mood() == Some(mood)] { (capitalize(mood)) }
                            }
                        }
                    }
                    div {
                        label class="block text-sm font-medium text-gray-700" for="sort" { "Sort by" }
                        select class="mt-2 rounded-md border border-gray-300 px-3 py-2" name="sort" id="sort" {
                            @for sort in SortBy::ALL {
                                option value=(sort.as_str()) selected[filters.sort == sort] { (capitalize(sort.as_str())) }
                            }
                        }
                    }
                    button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Filter" }
                    a class="text-sm text-gray-500 hover:text-gray-700" href="/" { "Clear" }
                }

                p class="mt-6 text-sm text-gray-500" {
                    (listing.total_results) " movies"
                }

                @if listing.movies.is_empty() {
                    div class="mt-6 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "No movies match these filters." }
                    }
                } @else {
                    div class="mt-6 grid gap-6 grid-cols-2 md:grid-cols-4 lg:grid-cols-5" {
                        @for movie in &listing.movies {
                            (movie_card(movie, listing.page))
                        }
                    }
                }

                (pagination(listing, filters))
            }
        },
    )
}

pub fn movie_detail_page(movie: &DecoratedMovie<'_>, from_page: i64) -> String {
    let m = movie.movie;

    page(
        &m.title,
        html! {
            (nav())
            div class="max-w-4xl mx-auto px-6 py-10" {
                a class="text-sm text-blue-600 hover:text-blue-800" href=(format!("/?page={from_page}")) { "← Back to movies" }

                div class="mt-6 bg-white shadow rounded-lg p-8 flex flex-col md:flex-row gap-8" {
                    img class="w-64 rounded-md shadow" src=(movie.poster_full) alt=(m.title);
                    div class="flex-1" {
                        h1 class="text-3xl font-bold text-gray-900" { (m.title) }
                        @if let Some(tagline) = m.extra("tagline") {
                            p class="mt-1 italic text-gray-500" { (tagline) }
                        }

                        div class="mt-4 flex flex-wrap gap-2" {
                            @for genre in m.genre_list() {
                                a class="rounded-full bg-gray-100 px-3 py-1 text-xs text-gray-700 hover:bg-gray-200" href=(format!("/?genre={}", urlencoding::encode(genre))) { (genre) }
                            }
                        }

                        dl class="mt-6 grid grid-cols-2 gap-x-6 gap-y-2 text-sm" {
                            dt class="text-gray-500" { "Language" }
                            dd class="text-gray-900 uppercase" { (m.original_language) }
                            dt class="text-gray-500" { "Popularity" }
                            dd class="text-gray-900" { (format!("{:.1}", m.popularity)) }
                            @for (column, label) in DETAIL_FIELDS {
                                @if let Some(value) = m.extra(column) {
                                    dt class="text-gray-500" { (label) }
                                    dd class="text-gray-900" { (value) }
                                }
                            }
                        }

                        @if let Some(overview) = m.extra("overview") {
                            p class="mt-6 text-gray-700 leading-relaxed" { (overview) }
                        }

                        a class="mt-8 inline-block rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/surprise" { "Surprise me" }
                    }
                }
            }
        },
    )
}

pub fn about_page() -> String {
    page(
        "About",
        html! {
            (nav())
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { "About" }
                    p class="mt-4 text-gray-700" {
                        "A catalog of movies from The Movie Database, sorted by popularity. "
                        "Search by title or people, filter by genre, language or mood, or let the site pick a movie for you."
                    }
                    p class="mt-4 text-sm text-gray-500" {
                        "This product uses the TMDB API but is not endorsed or certified by TMDB."
                    }
                }
            }
        },
    )
}

pub fn not_found_page(path: &str) -> String {
    page(
        "Page not found",
        html! {
            (nav())
            div class="max-w-xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { "Page not found" }
                    p class="mt-4 text-gray-700" {
                        "Nothing lives at " code class="rounded bg-gray-100 px-1" { (path) } "."
                    }
                    a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                }
            }
        },
    )
}

pub fn error_page(message: &str) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
                link rel="stylesheet" href="/static/css/style.css";
            }
            body class="min-h-screen bg-gray-50" { (body) }
        }
    }
    .into_string()
}

fn nav() -> Markup {
    html! {
        header class="bg-gray-900 text-white" {
            div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between" {
                a class="text-xl font-bold" href="/" { "Marquee" }
                nav class="flex gap-6 text-sm" {
                    a class="hover:text-gray-300" href="/" { "Movies" }
                    a class="hover:text-gray-300" href="/surprise" { "Surprise me" }
                    a class="hover:text-gray-300" href="/aboutme" { "About" }
                }
            }
        }
    }
}

fn movie_card(movie: &DecoratedMovie<'_>, page: i64) -> Markup {
    let m = movie.movie;
    html! {
        a class="block bg-white shadow rounded-lg overflow-hidden hover:shadow-lg" href=(format!("/movie/{}?from_page={}", m.id, page)) {
            img class="w-full aspect-[2/3] object-cover" src=(movie.poster_full) alt=(m.title) loading="lazy";
            div class="p-3" {
                h2 class="text-sm font-semibold text-gray-900 truncate" { (m.title) }
                @if let Some(date) = m.extra("release_date") {
                    p class="text-xs text-gray-500" { (date.get(..4).unwrap_or(date)) }
                }
            }
        }
    }
}

fn pagination(listing: &MoviePage<'_>, filters: &MovieFilters) -> Markup {
    let has_prev = listing.page > 1;
    let has_next = (listing.page as usize) < listing.total_pages;

    html! {
        @if listing.total_pages > 0 {
            div class="mt-10 flex items-center justify-center gap-6 text-sm" {
                @if has_prev {
                    a class="text-blue-600 hover:text-blue-800" href=(page_href(listing.page - 1, filters)) { "← Previous" }
                }
                span class="text-gray-600" { "Page " (listing.page) " of " (listing.total_pages) }
                @if has_next {
                    a class="text-blue-600 hover:text-blue-800" href=(page_href(listing.page + 1, filters)) { "Next →" }
                }
            }
        }
    }
}

fn page_href(page: i64, filters: &MovieFilters) -> String {
    let mut href = format!("/?page={page}");
    if let Some(genre) = filters.genre() {
        href.push_str(&format!("&genre={}", urlencoding::encode(genre)));
    }
    if let Some(language) = filters.language() {
        href.push_str(&format!("&language={}", urlencoding::encode(language)));
    }
    if let Some(search) = filters.search() {
        href.push_str(&format!("&search={}", urlencoding::encode(search)));
    }
    if let Some(mood) = filters.mood() {
        href.push_str(&format!("&mood={mood}"));
    }
    if filters.sort != SortBy::Popularity {
        href.push_str(&format!("&sort={}", filters.sort.as_str()));
    }
    href
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
