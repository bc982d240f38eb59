use criterion::{Criterion, criterion_group, criterion_main};
use inlay_parser::calls::{ExtractOptions, extract_call_sites};
use inlay_parser::languages::Language;
use inlay_parser::signature::parse_signature;
use std::hint::black_box;

const SAMPLE_TYPESCRIPT: &str = r#"
import { createTransport } from "./transport";

export class Mailer {
    constructor(private host: string, private port: number) {}

    send(to: string, subject: string, body: string): Promise<void> {
        const transport = createTransport(this.host, this.port);
        return transport.deliver(to, subject, format(body, { wrap: 72 }));
    }

    sendAll(recipients: string[], subject: string, body: string) {
        return Promise.all(recipients.map((to) => this.send(to, subject, body)));
    }
}

function format(text: string, options: { wrap: number }): string {
    return text.split("\n").map((line) => wrap(line, options.wrap)).join("\n");
}
"#;

const SAMPLE_PHP: &str = r"<?php
function contains($haystack, $needle) {
    return strpos($haystack, $needle) !== false;
}

class Repository {
    public function find($id, $columns = ['*']) {
        return $this->query->where('id', $id)->first($columns);
    }

    public function create(array $attributes) {
        $model = new Model($attributes, $this->connection);
        $model->save(['touch' => true], $this->events);
        return $model;
    }
}
";

fn bench_typescript_extraction(c: &mut Criterion) {
    let options = ExtractOptions::default();
    c.bench_function("extract_typescript", |b| {
        b.iter(|| {
            extract_call_sites(
                black_box(SAMPLE_TYPESCRIPT),
                Language::TypeScript,
                black_box(&options),
            )
        });
    });
}

fn bench_php_extraction(c: &mut Criterion) {
    let options = ExtractOptions::default();
    c.bench_function("extract_php", |b| {
        b.iter(|| extract_call_sites(black_box(SAMPLE_PHP), Language::Php, black_box(&options)));
    });
}

fn bench_signature_parsing(c: &mut Criterion) {
    let hover = "function transport.deliver<T extends Message>(to: string, subject: string, ...parts: T[]): Promise<void>";
    c.bench_function("parse_signature_bracketed", |b| {
        b.iter(|| parse_signature(Language::TypeScript, black_box(hover)));
    });
}

criterion_group!(
    benches,
    bench_typescript_extraction,
    bench_php_extraction,
    bench_signature_parsing
);
criterion_main!(benches);
