use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheepform::{parse, parser::Parser};

// ============================================================================
// Test Data: Varying Complexity and Size
// ============================================================================

const TINY_FORM: &str = "Login\n<User><Pass>\n";

const SMALL_FORM: &str = concat!(
    "Sign Up\n",
    "style:Material\n",
    "<First Name><Last Name>\n",
    "<Email,email>\n",
    "<Birthday,date>\n",
);

const MEDIUM_FORM: &str = concat!(
    "Annual Survey\n",
    "style:Mac\n",
    "output:HTML\n",
    "\n",
    "<Name,text><Email,email>\n",
    "<Country,dropdown>\n",
    "\t<USA>\n",
    "\t<Canada>\n",
    "\t<Mexico>\n",
    "\n",
    "About You\n",
    "\t<Age,int>\n",
    "\t<Bio,rich text>\n",
    "Feedback\n",
    "\t<Score,slider>\n",
    "\t<Recommend,dropdown>\n",
    "\t\t<Yes>\n",
    "\t\t<No>\n",
);

const LARGE_FORM: &str = concat!(
    "Employee Onboarding\n",
    "style:Windows\n",
    "output:Flutter\n",
    "\n",
    "<First Name><Middle Name><Last Name>\n",
    "<Email,email><Phone,phone>\n",
    "<Start Date,date><Shift,time>\n",
    "<Department,dropdown>\n",
    "\t<Engineering>\n",
    "\t<Sales>\n",
    "\t<Support>\n",
    "\t<Operations>\n",
    "\n",
    "Identity\n",
    "\t<Address,address>\n",
    "\t<ID Scan,images>\n",
    "\t<SSN,text>\n",
    "Payroll\n",
    "\t<Salary,double>\n",
    "\t<Card,credit card>\n",
    "\t<Contract,files>\n",
    "Preferences\n",
    "\t<Newsletter,checkbox>\n",
    "\t<Remote,tri-state box>\n",
    "\t<Theme,color>\n",
    "\t<Equipment,dropdown>\n",
    "\t\t<Laptop>\n",
    "\t\t<Desktop>\n",
);

// Generate very large forms for stress testing
fn generate_xlarge_form(section_count: usize) -> String {
    let mut form = String::from("Stress Test\nstyle:Material\noutput:Flutter\n\n");
    for i in 0..section_count {
        form.push_str(&format!("Section {i}\n"));
        form.push_str(&format!("\t<Field A{i},text><Field B{i},int>\n"));
        form.push_str(&format!("\t<Pick {i},dropdown>\n"));
        form.push_str("\t\t<First>\n\t\t<Second>\n\t\t<Third>\n");
    }
    form
}

// ============================================================================
// Parser Benchmarks
// ============================================================================

fn bench_parser_tiny(c: &mut Criterion) {
    c.bench_function("parser_tiny", |b| {
        b.iter(|| {
            let parser = Parser::new(black_box(TINY_FORM));
            parser.parse_document()
        })
    });
}

fn bench_parser_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_by_size");

    for (name, source) in [
        ("tiny", TINY_FORM),
        ("small", SMALL_FORM),
        ("medium", MEDIUM_FORM),
        ("large", LARGE_FORM),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| {
                let parser = Parser::new(black_box(src));
                parser.parse_document()
            })
        });
    }

    group.finish();
}

fn bench_parser_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_section_scaling");

    for size in [10, 50, 100, 500, 1000] {
        let source = generate_xlarge_form(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, src| {
            b.iter(|| {
                let parser = Parser::new(black_box(src));
                parser.parse_document()
            })
        });
    }

    group.finish();
}

// ============================================================================
// End-to-End Benchmarks
// ============================================================================

fn bench_e2e_with_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("e2e_with_json_serialization");

    for (name, source) in [
        ("tiny", TINY_FORM),
        ("small", SMALL_FORM),
        ("medium", MEDIUM_FORM),
        ("large", LARGE_FORM),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| {
                let form = parse(black_box(src), "benchmark.sheepform").unwrap();
                form.to_json()
            })
        });
    }

    group.finish();
}

fn bench_e2e_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("e2e_section_scaling");

    for size in [10, 50, 100, 500, 1000] {
        let source = generate_xlarge_form(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, src| {
            b.iter(|| parse(black_box(src), "benchmark.sheepform"))
        });
    }

    group.finish();
}

// ============================================================================
// Real-World Scenario Benchmarks
// ============================================================================

fn bench_realistic_checkout(c: &mut Criterion) {
    // Simulates the kind of checkout form a storefront would sketch out
    let checkout = concat!(
        "Checkout\n",
        "style:Material\n",
        "output:HTML\n",
        "\n",
        "Shipping\n",
        "\t<Full Name,text>\n",
        "\t<Address,address>\n",
        "\t<Delivery Window,date range>\n",
        "Billing\n",
        "\t<Card,credit card>\n",
        "\t<Billing Address,address>\n",
        "Extras\n",
        "\t<Gift Wrap,checkbox>\n",
        "\t<Speed,dropdown>\n",
        "\t\t<Standard>\n",
        "\t\t<Express>\n",
        "\t\t<Overnight>\n",
    );

    c.bench_function("realistic_checkout_form", |b| {
        b.iter(|| parse(black_box(checkout), "checkout.sheepform"))
    });
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    parser_benches,
    bench_parser_tiny,
    bench_parser_sizes,
    bench_parser_scaling
);

criterion_group!(e2e_benches, bench_e2e_with_serialization, bench_e2e_scaling);

criterion_group!(realistic_benches, bench_realistic_checkout);

criterion_main!(parser_benches, e2e_benches, realistic_benches);
