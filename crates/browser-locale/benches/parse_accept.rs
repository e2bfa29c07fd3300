use browser_locale::{AcceptedLocales, parse_weighted_locale};

pub(crate) fn bench(c: &mut criterion::Criterion) {
    c.bench_function("parse_weighted_locale", |b| {
        b.iter(|| parse_weighted_locale("fr-FR;q=0.8"))
    });
    c.bench_function("parse_accept_language", |b| {
        b.iter(|| AcceptedLocales::parse("fr,fr-FR;q=0.8,en;q=0.3,en-US;q=0.5"))
    });
    c.bench_function("parse_long_accept_language", |b| {
        b.iter(|| {
            AcceptedLocales::parse(
                "zh-CN,zh;q=0.9,en;q=0.8,en-GB;q=0.7,en-US;q=0.6,ja;q=0.5,ko;q=0.4,de;q=0.3,fr;q=0.2",
            )
        })
    });
}
