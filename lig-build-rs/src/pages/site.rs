//! The built-in page plan for the site.

use super::patch::Patch;
use std::path::PathBuf;

/// Directory holding the exported design templates, relative to the site root.
pub const TEMPLATE_DIR: &str =
    "stitch_designs/stitch_leverage_in_the_game_basketball_coaching_website";

const SCRIPT_TAGS: &str = r##"<script src="https://cdn.jsdelivr.net/npm/@supabase/supabase-js@2"></script>
<script src="js/config.js"></script>
<script src="js/script.js"></script>
</body>"##;

/// One output page: where its template lives, where it is written and the
/// substitutions that turn one into the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    /// Template path relative to the site root.
    pub template: PathBuf,
    /// Output path relative to the site root.
    pub output: PathBuf,
    pub patches: Vec<Patch>,
}

impl PagePlan {
    /// Name used in log messages and errors.
    pub fn name(&self) -> String {
        self.output.display().to_string()
    }
}

/// Inserts the client scripts (Supabase SDK, site config, site script)
/// right before `</body>`.
pub fn script_tags() -> Patch {
    Patch::new("script-tags", "</body>", SCRIPT_TAGS)
}

/// The three pages of the site: landing page with lead forms, checkout with
/// Stripe placeholders, and the thank-you page linking to checkout.
pub fn default_site() -> Vec<PagePlan> {
    vec![
        plan("leverage_in_the_game_sales_page_3", "index.html", index_patches()),
        plan("leverage_in_the_game_sales_page_5", "checkout.html", checkout_patches()),
        plan("leverage_in_the_game_sales_page_1", "thank-you.html", thank_you_patches()),
    ]
}

fn plan(design: &str, output: &str, patches: Vec<Patch>) -> PagePlan {
    PagePlan {
        template: PathBuf::from(TEMPLATE_DIR).join(design).join("code.html"),
        output: PathBuf::from(output),
        patches,
    }
}

fn index_patches() -> Vec<Patch> {
    vec![
        Patch::new(
            "nav-link",
            r##"<button class="bg-primary text-background-dark px-6 py-2.5 rounded-lg font-bold text-sm uppercase tracking-wider hover:bg-white transition-all transform active:scale-95">
          Get the Guide
        </button>"##,
            r##"<a href="#lead" class="bg-primary text-background-dark px-6 py-2.5 rounded-lg font-bold text-sm uppercase tracking-wider hover:bg-white transition-all transform active:scale-95 text-center flex items-center justify-center">
          Get the Guide
        </a>"##,
        ),
        Patch::new(
            "hero-form",
            r##"<div class="flex flex-col sm:flex-row gap-3 max-w-md">
<input class="flex-1 bg-white/5 border border-white/10 rounded-lg px-6 py-4 focus:ring-2 focus:ring-primary focus:border-transparent outline-none" placeholder="Enter your email" type="email"/>
<button class="bg-primary text-background-dark px-8 py-4 rounded-lg font-bold uppercase tracking-widest hover:bg-white transition-all whitespace-nowrap">
            Access Guide
          </button>
</div>"##,
            r##"<form class="flex flex-col sm:flex-row gap-3 max-w-md" data-lead-form data-auth-otp="true" data-redirect="thank-you.html">
<input name="name" type="hidden" value="Interested Player"/>
<input name="email" class="flex-1 bg-white/5 border border-white/10 rounded-lg px-6 py-4 focus:ring-2 focus:ring-primary focus:border-transparent outline-none" placeholder="Enter your email" type="email" required/>
<button type="submit" class="bg-primary text-background-dark px-8 py-4 rounded-lg font-bold uppercase tracking-widest hover:bg-white transition-all whitespace-nowrap">
            Access Guide
          </button>
</form>"##,
        ),
        Patch::new(
            "bottom-form",
            r##"<form class="space-y-4">"##,
            r##"<form id="lead" class="space-y-4" data-lead-form data-auth-otp="true" data-redirect="thank-you.html">"##,
        ),
        Patch::new(
            "bottom-form-name",
            r##"<input class="w-full bg-background-dark border border-white/10 rounded-lg px-4 py-3 focus:ring-primary focus:border-primary outline-none" placeholder="John Doe" type="text"/>"##,
            r##"<input name="name" class="w-full bg-background-dark border border-white/10 rounded-lg px-4 py-3 focus:ring-primary focus:border-primary outline-none" placeholder="John Doe" type="text" required/>"##,
        ),
        Patch::new(
            "bottom-form-email",
            r##"<input class="w-full bg-background-dark border border-white/10 rounded-lg px-4 py-3 focus:ring-primary focus:border-primary outline-none" placeholder="john@athlete.com" type="email"/>"##,
            r##"<input name="email" class="w-full bg-background-dark border border-white/10 rounded-lg px-4 py-3 focus:ring-primary focus:border-primary outline-none" placeholder="john@athlete.com" type="email" required/>"##,
        ),
        Patch::new(
            "bottom-form-submit",
            r##"<button class="w-full bg-primary text-background-dark font-oswald text-xl font-bold uppercase py-4 rounded-lg tracking-widest hover:bg-white transition-all transform hover:-translate-y-1 shadow-lg shadow-primary/20 mt-4">
            Get Instant Access
          </button>"##,
            r##"<button type="submit" class="w-full bg-primary text-background-dark font-oswald text-xl font-bold uppercase py-4 rounded-lg tracking-widest hover:bg-white transition-all transform hover:-translate-y-1 shadow-lg shadow-primary/20 mt-4">
            Get Instant Access
          </button>"##,
        ),
        script_tags(),
    ]
}

fn checkout_patches() -> Vec<Patch> {
    vec![
        Patch::new(
            "back-link",
            r##"<a class="text-xs uppercase font-bold text-slate-400 hover:text-primary transition-colors" href="#">Back</a>"##,
            r##"<a class="text-xs uppercase font-bold text-slate-400 hover:text-primary transition-colors" href="index.html">Back</a>"##,
        ),
        Patch::new(
            "stripe-buy-now",
            r##"<button class="w-full bg-primary text-background-dark h-16 rounded-xl font-oswald text-xl font-black uppercase tracking-widest flex items-center justify-center gap-3 hover:scale-[1.02] active:scale-[0.98] transition-all shadow-[0_0_20px_rgba(183,217,89,0.3)]">
<span class="material-symbols-outlined font-normal">shopping_cart</span>
                Buy Now with Stripe
            </button>"##,
            r##"<a href="#" data-stripe-link aria-disabled="true" class="w-full bg-primary text-background-dark h-16 rounded-xl font-oswald text-xl font-black uppercase tracking-widest flex items-center justify-center gap-3 hover:scale-[1.02] active:scale-[0.98] transition-all shadow-[0_0_20px_rgba(183,217,89,0.3)]">
<span class="material-symbols-outlined font-normal">shopping_cart</span>
                Buy Now with Stripe
            </a>"##,
        ),
        Patch::new(
            "stripe-unlock",
            r##"<button class="w-full bg-primary text-background-dark h-14 rounded-lg font-oswald text-lg font-black uppercase tracking-widest shadow-lg shadow-primary/20">
                Unlock Access — $149
            </button>"##,
            r##"<a href="#" data-stripe-link aria-disabled="true" class="w-full bg-primary text-background-dark flex items-center justify-center h-14 rounded-lg font-oswald text-lg font-black uppercase tracking-widest shadow-lg shadow-primary/20">
                Unlock Access — $149
            </a>"##,
        ),
        script_tags(),
    ]
}

fn thank_you_patches() -> Vec<Patch> {
    vec![
        Patch::new(
            "nav-cta",
            r##"<button class="bg-primary text-background-dark px-4 py-1.5 rounded-lg font-bold text-xs uppercase tracking-wider hover:bg-white transition-all active:scale-95">
            Get Full Guide
        </button>"##,
            r##"<a href="checkout.html" class="bg-primary text-background-dark px-4 py-1.5 rounded-lg font-bold text-xs uppercase tracking-wider hover:bg-white transition-all active:scale-95 flex items-center justify-center">
            Get Full Guide
        </a>"##,
        ),
        Patch::new(
            "full-guide-cta",
            r##"<button class="w-full bg-primary text-background-dark font-oswald text-xl font-bold uppercase py-4 rounded-xl tracking-widest hover:bg-white transition-all transform active:scale-[0.98] shadow-lg shadow-primary/20">
                    Get The Full Guide
                </button>"##,
            r##"<a href="checkout.html" class="w-full bg-primary text-background-dark font-oswald text-xl font-bold uppercase py-4 rounded-xl tracking-widest hover:bg-white transition-all transform active:scale-[0.98] shadow-lg shadow-primary/20 flex items-center justify-center">
                    Get The Full Guide
                </a>"##,
        ),
        script_tags(),
    ]
}
