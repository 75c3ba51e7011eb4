/*!
# Introductory Tutorial

Put a program in a file and hand it to the executable.

<pre><code>&nbsp;  $ cat hello.bas
&nbsp;  10 PRINT "Hello World"
&nbsp;  $ basic hello.bas
&nbsp;  Hello World
</code></pre>

Without a file, type the program in line by line and finish with `RUN`
(or CTRL-D). Nothing executes until then.

<pre><code>&nbsp;> 10 FOR I = 1 TO 3
&nbsp;> 20 PRINT I;
&nbsp;> 30 NEXT
&nbsp;> RUN
&nbsp;   1  2  3
</code></pre>

Each line holds one statement. Line numbers are optional, but a line
needs one to be the target of `GOTO`, `GOSUB` or `IF ... THEN`. Lines
run in the order they were written, not in line number order.

There are two kinds of values: numbers and strings. Any variable can
hold either. Comparisons produce a number, -1 for true and 0 for false.

<pre><code>&nbsp;> 10 A = "STEVE"
&nbsp;> 20 IF A = "STEVE" THEN PRINT "HI " + A ELSE PRINT "WHO?"
&nbsp;> RUN
&nbsp;  HI STEVE
</code></pre>

Mistakes stop the program with a message naming the line.

<pre><code>&nbsp;> 10 A = 3 * "X"
&nbsp;> RUN
&nbsp;  ?OPERATOR ONLY HANDLES NUMBERS IN 10
</code></pre>

Start the executable with `--trace` to see each line number in brackets
as it runs. It's handy for following `GOTO` and `GOSUB`.

<pre><code>&nbsp;  $ basic --trace hello.bas
&nbsp;  [10]Hello World
</code></pre>

*/
